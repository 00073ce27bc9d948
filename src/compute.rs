//! Pure game-rule functions.
//!
//! Nothing here touches engine state: every function maps its inputs to a
//! new value.  The only randomness enters through an injected `RollSource`.

use crate::config::{EngineConfig, LANE_COUNT};
use crate::entities::{FallingObject, FruitTier, Lane, ObjectKind};
use crate::rolls::RollSource;

// ── Spawn thresholds ─────────────────────────────────────────────────────────

/// A kind roll at or below this spawns a bomb (20% of draws).
pub const BOMB_THRESHOLD: f64 = 0.2;
/// Fruit tier roll above this is a grape.
pub const GRAPE_THRESHOLD: f64 = 0.9;
/// Fruit tier roll above this (and not a grape) is an orange.
pub const ORANGE_THRESHOLD: f64 = 0.7;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Horizontal pixel center of `lane`.
pub fn lane_center(config: &EngineConfig, lane: Lane) -> f64 {
    let width = config.lane_width();
    lane.index() as f64 * width + width / 2.0
}

/// True when `y` lies inside the catch band around the basket (inclusive).
pub fn in_catch_band(config: &EngineConfig, y: f64) -> bool {
    y >= config.basket_y - config.catch_band && y <= config.basket_y + config.catch_band
}

/// True once an object has dropped past the bottom of the playfield.
pub fn past_floor(config: &EngineConfig, y: f64) -> bool {
    y > config.game_height
}

// ── Difficulty ───────────────────────────────────────────────────────────────

/// Fall speed, in px/s, of objects spawned at `level`.
pub fn object_speed(config: &EngineConfig, level: u32) -> f64 {
    config.base_speed + level as f64 * config.speed_per_level
}

/// Spawn interval at `level`: the base interval at level 1, one step shorter
/// per level after that, never below the floor.  Level 1 maps to the base
/// interval itself, so level 2 is the first one to speed up.
pub fn spawn_interval_for_level(config: &EngineConfig, level: u32) -> f64 {
    let steps = level.saturating_sub(1) as f64;
    (config.base_spawn_interval_ms - steps * config.spawn_interval_step_ms)
        .max(config.min_spawn_interval_ms)
}

/// Level implied by `score`: one level per `level_score_step` points.
pub fn level_for_score(config: &EngineConfig, score: u32) -> u32 {
    score / config.level_score_step + 1
}

// ── Spawning ─────────────────────────────────────────────────────────────────

fn lane_from_roll(roll: f64) -> Lane {
    let index = (roll * LANE_COUNT as f64).floor() as usize;
    Lane::ALL[index.min(LANE_COUNT - 1)]
}

fn tier_from_roll(roll: f64) -> FruitTier {
    if roll > GRAPE_THRESHOLD {
        FruitTier::Grape
    } else if roll > ORANGE_THRESHOLD {
        FruitTier::Orange
    } else {
        FruitTier::Apple
    }
}

/// Create a new object at the top of a random lane.
///
/// Draw order: lane, kind, then (fruit only) tier.
pub fn roll_object(
    config: &EngineConfig,
    level: u32,
    rolls: &mut impl RollSource,
) -> FallingObject {
    let lane = lane_from_roll(rolls.next_roll());
    let kind = if rolls.next_roll() <= BOMB_THRESHOLD {
        ObjectKind::Bomb
    } else {
        ObjectKind::Fruit(tier_from_roll(rolls.next_roll()))
    };

    FallingObject {
        lane,
        x: lane_center(config, lane),
        y: -config.spawn_offset,
        kind,
        score_value: kind.score_value(),
        speed: object_speed(config, level),
    }
}

// ── Scoring ──────────────────────────────────────────────────────────────────

/// Score after catching `object`.  Bombs are floored at zero; fruit values
/// are positive so they can only add.
pub fn score_after_catch(score: u32, object: &FallingObject) -> u32 {
    match object.kind {
        ObjectKind::Bomb => (score as i64 + object.score_value as i64).max(0) as u32,
        ObjectKind::Fruit(_) => score.saturating_add(object.score_value.max(0) as u32),
    }
}
