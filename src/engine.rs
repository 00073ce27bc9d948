//! The game-state engine.
//!
//! `GameEngine` owns every falling object and all rule state.  A host drives
//! it with one `update(now_ms)` per frame plus `set_basket_lane` whenever the
//! pose classifier settles on a label, and reads it back through `draw` and
//! the two notifications.

use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::compute::{
    in_catch_band, lane_center, level_for_score, past_floor, roll_object, score_after_catch,
    spawn_interval_for_level,
};
use crate::config::EngineConfig;
use crate::entities::{FallingObject, GameResult, Lane, ObjectKind, ScoreChange};
use crate::rolls::{RngRolls, RollSource};
use crate::surface::Surface;

type ScoreChangeCallback = Box<dyn FnMut(ScoreChange)>;
type GameEndCallback = Box<dyn FnMut(GameResult)>;

pub struct GameEngine<S: RollSource = RngRolls<StdRng>> {
    config: EngineConfig,
    rolls: S,

    score: u32,
    level: u32,
    lives: u32,
    active: bool,
    basket_lane: Lane,
    falling_objects: Vec<FallingObject>,

    // ── Timing ───────────────────────────────────────────────────────────────
    /// `None` until the first spawn of a session, so that spawn is immediate.
    last_spawn_at: Option<f64>,
    spawn_interval_ms: f64,
    /// `None` right after `start()`: the first frame has zero length.
    last_frame_at: Option<f64>,
    objects_spawned: u64,

    on_score_change: Option<ScoreChangeCallback>,
    on_game_end: Option<GameEndCallback>,
}

impl GameEngine {
    /// Engine with spawns seeded from OS entropy.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_rolls(config, RngRolls::new(StdRng::from_entropy()))
    }

    /// Engine whose spawn sequence is fully determined by `seed`.
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self> {
        Self::with_rolls(config, RngRolls::new(StdRng::seed_from_u64(seed)))
    }
}

impl<S: RollSource> GameEngine<S> {
    /// Fails when `config` does not pass `EngineConfig::validate`.
    pub fn with_rolls(config: EngineConfig, rolls: S) -> Result<Self> {
        config.validate()?;

        let spawn_interval_ms = config.base_spawn_interval_ms;
        let lives = config.initial_lives;
        Ok(Self {
            config,
            rolls,
            score: 0,
            level: 1,
            lives,
            active: false,
            basket_lane: Lane::Center,
            falling_objects: Vec::new(),
            last_spawn_at: None,
            spawn_interval_ms,
            last_frame_at: None,
            objects_spawned: 0,
            on_score_change: None,
            on_game_end: None,
        })
    }

    // ── Observers ────────────────────────────────────────────────────────────

    pub fn set_score_change_callback(&mut self, callback: impl FnMut(ScoreChange) + 'static) {
        self.on_score_change = Some(Box::new(callback));
    }

    pub fn set_game_end_callback(&mut self, callback: impl FnMut(GameResult) + 'static) {
        self.on_game_end = Some(Box::new(callback));
    }

    // ── Lifecycle ────────────────────────────────────────────────────────────

    /// Begin a clean session from any prior state.
    pub fn start(&mut self) {
        self.score = 0;
        self.level = 1;
        self.lives = self.config.initial_lives;
        self.falling_objects.clear();
        self.last_spawn_at = None;
        self.spawn_interval_ms = spawn_interval_for_level(&self.config, 1);
        self.last_frame_at = None;
        self.objects_spawned = 0;
        self.basket_lane = Lane::Center;
        self.active = true;

        info!("Game started! Catch the fruits!");
    }

    /// End the session.  Fires the game-end notification only when the
    /// engine was active, so repeated calls report once.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        info!("Game over: score {}, level {}", self.score, self.level);

        let result = GameResult {
            score: self.score,
            level: self.level,
        };
        if let Some(callback) = self.on_game_end.as_mut() {
            callback(result);
        }
    }

    // ── Input ────────────────────────────────────────────────────────────────

    /// Apply a stabilized classifier label.  Unknown labels are ignored.
    pub fn set_basket_lane(&mut self, label: &str) {
        if let Some(lane) = Lane::from_label(label) {
            self.basket_lane = lane;
        }
    }

    // ── Per-frame update ─────────────────────────────────────────────────────

    /// Advance the simulation to `now` (milliseconds, monotonic).
    pub fn update(&mut self, now: f64) {
        if !self.active {
            return;
        }

        // 1. Frame delta; a clock that stalls or runs backwards gives zero
        let delta_seconds = match self.last_frame_at {
            Some(last) => (now - last).max(0.0) / 1000.0,
            None => 0.0,
        };
        self.last_frame_at = Some(now);

        // 2. Spawn
        let spawn_due = match self.last_spawn_at {
            Some(last) => now - last > self.spawn_interval_ms,
            None => true,
        };
        if spawn_due {
            self.spawn_object();
            self.last_spawn_at = Some(now);
        }

        // 3. Move, then resolve catches before floor exits.  Walking the
        //    indices backwards keeps removal from skipping anything.
        for i in (0..self.falling_objects.len()).rev() {
            let object = &mut self.falling_objects[i];
            object.y += object.speed * delta_seconds;

            if in_catch_band(&self.config, object.y) && object.lane == self.basket_lane {
                let object = self.falling_objects.remove(i);
                self.handle_catch(&object);
            } else if past_floor(&self.config, object.y) {
                let object = self.falling_objects.remove(i);
                self.handle_miss(&object);
            }

            if !self.active {
                break;
            }
        }
    }

    fn spawn_object(&mut self) {
        let object = roll_object(&self.config, self.level, &mut self.rolls);
        debug!(
            "Spawned {:?} in lane {} at speed {}",
            object.kind,
            object.lane.label(),
            object.speed
        );
        self.falling_objects.push(object);
        self.objects_spawned += 1;
    }

    // ── Resolution ───────────────────────────────────────────────────────────

    fn handle_catch(&mut self, object: &FallingObject) {
        self.score = score_after_catch(self.score, object);
        match object.kind {
            ObjectKind::Bomb => info!("BOMB! score now {}", self.score),
            ObjectKind::Fruit(tier) => debug!("Caught {:?}, score now {}", tier, self.score),
        }

        self.check_level_up();
        self.notify_score_change();

        if self.lives == 0 {
            self.stop();
        }
    }

    fn handle_miss(&mut self, object: &FallingObject) {
        // Dodged bombs and dropped fruit are both neutral.
        if let ObjectKind::Fruit(tier) = object.kind {
            debug!("Missed {:?}", tier);
        }

        self.notify_score_change();

        if self.lives == 0 {
            self.stop();
        }
    }

    fn check_level_up(&mut self) {
        let new_level = level_for_score(&self.config, self.score);
        if new_level > self.level {
            self.level = new_level;
            self.spawn_interval_ms = spawn_interval_for_level(&self.config, self.level);
            info!(
                "Level Up! Current Level: {} (spawn every {} ms)",
                self.level, self.spawn_interval_ms
            );
        }
    }

    fn notify_score_change(&mut self) {
        let change = ScoreChange {
            score: self.score,
            level: self.level,
            lives: self.lives,
        };
        if let Some(callback) = self.on_score_change.as_mut() {
            callback(change);
        }
    }

    // ── Presentation ─────────────────────────────────────────────────────────

    /// Draw the current frame.  Reads state only; does nothing while inactive.
    pub fn draw<D: Surface>(&self, surface: &mut D) -> Result<(), D::Error> {
        if !self.active {
            return Ok(());
        }

        let basket_x = lane_center(&self.config, self.basket_lane);
        surface.draw_basket(self.basket_lane, basket_x, self.config.basket_y)?;

        for object in &self.falling_objects {
            surface.draw_object(object)?;
        }

        surface.draw_text(&format!("Score: {}", self.score), 10.0, 20.0)?;
        surface.draw_text(&format!("Level: {}", self.level), 10.0, 40.0)?;
        Ok(())
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn basket_lane(&self) -> Lane {
        self.basket_lane
    }

    pub fn spawn_interval_ms(&self) -> f64 {
        self.spawn_interval_ms
    }

    pub fn falling_objects(&self) -> &[FallingObject] {
        &self.falling_objects
    }

    /// Objects spawned since the last `start()`.
    pub fn objects_spawned(&self) -> u64 {
        self.objects_spawned
    }
}
