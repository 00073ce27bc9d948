//! Random source for spawn decisions.
//!
//! Every spawn draws uniform values in `[0, 1)` and compares them against
//! fixed thresholds (see `compute::roll_object`).  Putting the draws behind a
//! trait lets tests script exact outcomes while the game uses `rand`.

use rand::Rng;

pub trait RollSource {
    /// Next uniform value in `[0, 1)`.
    fn next_roll(&mut self) -> f64;
}

/// `RollSource` backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngRolls<R: Rng> {
    rng: R,
}

impl<R: Rng> RngRolls<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RollSource for RngRolls<R> {
    fn next_roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
