//! Game entity types: pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lane {
    Left,
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    /// Zero-based lane index (LEFT = 0, CENTER = 1, RIGHT = 2).
    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    /// Map a stabilized classifier label to a lane.  Labels are matched
    /// exactly; anything else yields `None`.
    pub fn from_label(label: &str) -> Option<Lane> {
        match label {
            "LEFT" => Some(Lane::Left),
            "CENTER" => Some(Lane::Center),
            "RIGHT" => Some(Lane::Right),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lane::Left => "LEFT",
            Lane::Center => "CENTER",
            Lane::Right => "RIGHT",
        }
    }
}

// ── Falling objects ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FruitTier {
    /// Base tier, 100 points.
    Apple,
    /// Mid tier, 200 points.
    Orange,
    /// Top tier, 300 points.
    Grape,
}

impl FruitTier {
    pub fn score_value(self) -> i32 {
        match self {
            FruitTier::Apple => 100,
            FruitTier::Orange => 200,
            FruitTier::Grape => 300,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Fruit(FruitTier),
    Bomb,
}

pub const BOMB_SCORE: i32 = -500;

pub const BASKET_ICON: &str = "🧺";

impl ObjectKind {
    /// Signed reward for catching an object of this kind.
    pub fn score_value(self) -> i32 {
        match self {
            ObjectKind::Fruit(tier) => tier.score_value(),
            ObjectKind::Bomb => BOMB_SCORE,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ObjectKind::Fruit(FruitTier::Apple) => "🍎",
            ObjectKind::Fruit(FruitTier::Orange) => "🍊",
            ObjectKind::Fruit(FruitTier::Grape) => "🍇",
            ObjectKind::Bomb => "💣",
        }
    }

    pub fn is_bomb(self) -> bool {
        matches!(self, ObjectKind::Bomb)
    }
}

/// One object falling down a lane.  `x` and `speed` are fixed at spawn;
/// only `y` changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct FallingObject {
    pub lane: Lane,
    /// Horizontal pixel position (lane center).
    pub x: f64,
    /// Vertical pixel position; negative while above the playfield.
    pub y: f64,
    pub kind: ObjectKind,
    pub score_value: i32,
    /// Pixels per second.
    pub speed: f64,
}

impl FallingObject {
    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }
}

// ── Notifications ─────────────────────────────────────────────────────────────

/// Payload of the score/level/lives change notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreChange {
    pub score: u32,
    pub level: u32,
    pub lives: u32,
}

/// Payload of the game-end notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub score: u32,
    pub level: u32,
}
