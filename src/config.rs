//! Engine configuration.
//!
//! Construction-time constants for the playfield, spawn cadence and leveling.
//! Defaults reproduce the stock game; any of them can be overridden from an
//! INI file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [playfield]
//! width = 200
//! height = 200
//! basket_y = 170
//! catch_band = 20
//! spawn_offset = 30
//!
//! [spawn]
//! interval_ms = 1500
//! interval_step_ms = 100
//! min_interval_ms = 500
//!
//! [speed]
//! base = 100
//! per_level = 20
//!
//! [rules]
//! level_score_step = 1000
//! initial_lives = 3
//! ```

use std::path::Path;

use anyhow::{anyhow, ensure, Context, Result};
use configparser::ini::Ini;
use log::info;

const DEFAULT_GAME_WIDTH: f64 = 200.0;
const DEFAULT_GAME_HEIGHT: f64 = 200.0;
const DEFAULT_BASKET_Y: f64 = 170.0;
const DEFAULT_CATCH_BAND: f64 = 20.0;
const DEFAULT_SPAWN_OFFSET: f64 = 30.0;
const DEFAULT_SPAWN_INTERVAL_MS: f64 = 1500.0;
const DEFAULT_SPAWN_INTERVAL_STEP_MS: f64 = 100.0;
const DEFAULT_MIN_SPAWN_INTERVAL_MS: f64 = 500.0;
const DEFAULT_BASE_SPEED: f64 = 100.0;
const DEFAULT_SPEED_PER_LEVEL: f64 = 20.0;
const DEFAULT_LEVEL_SCORE_STEP: u32 = 1000;
const DEFAULT_INITIAL_LIVES: u32 = 3;

/// Number of lanes; not configurable.
pub const LANE_COUNT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Playfield width in pixels.
    pub game_width: f64,
    /// Playfield height in pixels; objects below it have left the field.
    pub game_height: f64,
    /// Fixed vertical position of the basket.
    pub basket_y: f64,
    /// Half-height of the catch band centered on `basket_y`.
    pub catch_band: f64,
    /// Objects spawn this far above the top edge.
    pub spawn_offset: f64,
    pub base_spawn_interval_ms: f64,
    pub spawn_interval_step_ms: f64,
    pub min_spawn_interval_ms: f64,
    pub base_speed: f64,
    pub speed_per_level: f64,
    /// Points needed per level.
    pub level_score_step: u32,
    pub initial_lives: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            game_width: DEFAULT_GAME_WIDTH,
            game_height: DEFAULT_GAME_HEIGHT,
            basket_y: DEFAULT_BASKET_Y,
            catch_band: DEFAULT_CATCH_BAND,
            spawn_offset: DEFAULT_SPAWN_OFFSET,
            base_spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            spawn_interval_step_ms: DEFAULT_SPAWN_INTERVAL_STEP_MS,
            min_spawn_interval_ms: DEFAULT_MIN_SPAWN_INTERVAL_MS,
            base_speed: DEFAULT_BASE_SPEED,
            speed_per_level: DEFAULT_SPEED_PER_LEVEL,
            level_score_step: DEFAULT_LEVEL_SCORE_STEP,
            initial_lives: DEFAULT_INITIAL_LIVES,
        }
    }
}

impl EngineConfig {
    /// Default configuration on a custom playfield.  The basket stays at its
    /// default height.
    pub fn with_playfield(width: f64, height: f64) -> Self {
        Self {
            game_width: width,
            game_height: height,
            ..Default::default()
        }
    }

    pub fn lane_width(&self) -> f64 {
        self.game_width / LANE_COUNT as f64
    }

    /// Load overrides from an INI file on top of the defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        ini.load(path)
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("failed to load config file {}", path.display()))?;
        let config = Self::from_ini(&ini)?;
        info!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse overrides from INI text on top of the defaults.
    pub fn from_ini_str(text: &str) -> Result<Self> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| anyhow!(e))
            .context("failed to parse config")?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let mut config = Self::default();

        // [playfield]
        read_float(ini, "playfield", "width", &mut config.game_width)?;
        read_float(ini, "playfield", "height", &mut config.game_height)?;
        read_float(ini, "playfield", "basket_y", &mut config.basket_y)?;
        read_float(ini, "playfield", "catch_band", &mut config.catch_band)?;
        read_float(ini, "playfield", "spawn_offset", &mut config.spawn_offset)?;

        // [spawn]
        read_float(ini, "spawn", "interval_ms", &mut config.base_spawn_interval_ms)?;
        read_float(ini, "spawn", "interval_step_ms", &mut config.spawn_interval_step_ms)?;
        read_float(ini, "spawn", "min_interval_ms", &mut config.min_spawn_interval_ms)?;

        // [speed]
        read_float(ini, "speed", "base", &mut config.base_speed)?;
        read_float(ini, "speed", "per_level", &mut config.speed_per_level)?;

        // [rules]
        read_uint(ini, "rules", "level_score_step", &mut config.level_score_step)?;
        read_uint(ini, "rules", "initial_lives", &mut config.initial_lives)?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.game_width > 0.0 && self.game_height > 0.0,
            "playfield must be non-empty, got {}x{}",
            self.game_width,
            self.game_height
        );
        ensure!(self.catch_band >= 0.0, "catch_band must not be negative");
        ensure!(self.spawn_offset >= 0.0, "spawn_offset must not be negative");
        ensure!(
            self.min_spawn_interval_ms > 0.0,
            "min_interval_ms must be positive"
        );
        ensure!(
            self.min_spawn_interval_ms <= self.base_spawn_interval_ms,
            "min_interval_ms ({}) exceeds interval_ms ({})",
            self.min_spawn_interval_ms,
            self.base_spawn_interval_ms
        );
        ensure!(
            self.spawn_interval_step_ms >= 0.0,
            "interval_step_ms must not be negative"
        );
        ensure!(self.base_speed > 0.0, "base speed must be positive");
        ensure!(self.level_score_step > 0, "level_score_step must be positive");
        Ok(())
    }
}

fn read_float(ini: &Ini, section: &str, key: &str, slot: &mut f64) -> Result<()> {
    let value = ini
        .getfloat(section, key)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("[{section}] {key}"))?;
    if let Some(value) = value {
        *slot = value;
    }
    Ok(())
}

fn read_uint(ini: &Ini, section: &str, key: &str, slot: &mut u32) -> Result<()> {
    let value = ini
        .getuint(section, key)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("[{section}] {key}"))?;
    if let Some(value) = value {
        *slot = u32::try_from(value).with_context(|| format!("[{section}] {key} out of range"))?;
    }
    Ok(())
}
