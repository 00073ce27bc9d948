use fruit_catch::entities::*;

#[test]
fn lane_labels_round_trip() {
    for lane in Lane::ALL {
        assert_eq!(Lane::from_label(lane.label()), Some(lane));
    }
}

#[test]
fn lane_labels_are_exact() {
    assert_eq!(Lane::from_label("left"), None);
    assert_eq!(Lane::from_label(" LEFT"), None);
    assert_eq!(Lane::from_label(""), None);
    assert_eq!(Lane::from_label("UP"), None);
}

#[test]
fn lane_indices_are_ordered() {
    assert_eq!(Lane::Left.index(), 0);
    assert_eq!(Lane::Center.index(), 1);
    assert_eq!(Lane::Right.index(), 2);
}

#[test]
fn object_kind_values_and_icons() {
    assert_eq!(ObjectKind::Fruit(FruitTier::Apple).score_value(), 100);
    assert_eq!(ObjectKind::Fruit(FruitTier::Orange).score_value(), 200);
    assert_eq!(ObjectKind::Fruit(FruitTier::Grape).score_value(), 300);
    assert_eq!(ObjectKind::Bomb.score_value(), -500);

    assert_eq!(ObjectKind::Bomb.icon(), "💣");
    assert_eq!(ObjectKind::Fruit(FruitTier::Apple).icon(), "🍎");
    assert!(ObjectKind::Bomb.is_bomb());
    assert!(!ObjectKind::Fruit(FruitTier::Grape).is_bomb());
}

#[test]
fn falling_object_clone_is_independent() {
    let original = FallingObject {
        lane: Lane::Left,
        x: 33.0,
        y: -30.0,
        kind: ObjectKind::Fruit(FruitTier::Orange),
        score_value: 200,
        speed: 120.0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.y = 150.0;

    assert_eq!(cloned.y, 150.0);
    assert_eq!(original.y, -30.0);
    assert_eq!(cloned.lane, original.lane);
    assert_eq!(original.icon(), "🍊");
}
