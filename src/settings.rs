//! Runtime settings
//!
//! Loaded from an optional JSON file. Anything missing falls back to the
//! built-in defaults, which reproduce the arcade behavior exactly.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_FRAME_RATE;

/// Why a settings file could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Vertical refresh rate of the frame clock (Hz)
    pub frame_rate: u32,

    // === Gameplay ===
    /// Frames after a paddle hit during which the paddle is ignored.
    /// 0 keeps the arcade behavior, where a fast ball can score twice.
    pub paddle_cooldown_frames: u32,

    // === Terminal ===
    /// Draw the screen to stdout
    pub render_terminal: bool,
    /// Redraw every Nth frame
    pub redraw_every: u64,
    /// Read pad commands from stdin
    pub stdin_pad: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,

            // Gameplay
            paddle_cooldown_frames: 0,

            // Terminal
            render_terminal: true,
            redraw_every: 1,
            stdin_pad: true,
        }
    }
}

impl Settings {
    /// Highest frame rate the clock accepts
    pub const MAX_FRAME_RATE: u32 = 1000;

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise (or on any error) use defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_rate == 0 || self.frame_rate > Self::MAX_FRAME_RATE {
            return Err(SettingsError::Invalid(format!(
                "frame_rate must be 1-{}, got {}",
                Self::MAX_FRAME_RATE,
                self.frame_rate
            )));
        }
        if self.redraw_every == 0 {
            return Err(SettingsError::Invalid(
                "redraw_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
