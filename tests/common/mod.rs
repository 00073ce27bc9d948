#![allow(dead_code)]

use fruit_catch::RollSource;

/// Replays a fixed list of rolls, wrapping around when exhausted.
pub struct ScriptedRolls {
    rolls: Vec<f64>,
    next: usize,
}

impl ScriptedRolls {
    pub fn new(rolls: &[f64]) -> Self {
        assert!(!rolls.is_empty());
        Self { rolls: rolls.to_vec(), next: 0 }
    }

    /// Rolls consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RollSource for ScriptedRolls {
    fn next_roll(&mut self) -> f64 {
        let roll = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        roll
    }
}

// Roll triples in draw order: lane, kind, tier.
pub const CENTER_APPLE: [f64; 3] = [0.5, 0.5, 0.0];
pub const CENTER_GRAPE: [f64; 3] = [0.5, 0.5, 0.95];
pub const LEFT_APPLE: [f64; 3] = [0.0, 0.5, 0.0];
/// Bombs only draw lane and kind.
pub const CENTER_BOMB: [f64; 2] = [0.5, 0.1];
