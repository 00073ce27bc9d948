//! Fruit Catch: the game-state engine of a motion-controlled catching game.
//!
//! Objects fall down three lanes toward a basket whose lane is chosen by an
//! external pose classifier.  The engine owns spawning, motion, collision,
//! scoring and leveling; rendering and input stay with the host.
//!
//! ```
//! use fruit_catch::{EngineConfig, GameEngine};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut engine = GameEngine::seeded(EngineConfig::default(), 7)?;
//! engine.set_score_change_callback(|change| println!("score {}", change.score));
//! engine.start();
//! engine.set_basket_lane("LEFT");
//! engine.update(0.0);
//! engine.update(16.0);
//! assert_eq!(engine.objects_spawned(), 1);
//! # Ok(())
//! # }
//! ```

pub mod compute;
pub mod config;
pub mod engine;
pub mod entities;
pub mod rolls;
pub mod surface;

pub use config::EngineConfig;
pub use engine::GameEngine;
pub use entities::{FallingObject, FruitTier, GameResult, Lane, ObjectKind, ScoreChange};
pub use rolls::{RngRolls, RollSource};
pub use surface::Surface;
