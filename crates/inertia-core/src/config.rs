use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::momentum::timing::{tick_bound, MAX_GLIDE_TICKS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Momentum scrolling constants
///
/// Velocity is measured in offset units per frame tick. A wheel event adds
/// `clamp(delta * input_scale, ±per_event_impulse_cap)` to the velocity, which
/// is then held within `±max_velocity`. Every tick multiplies the velocity by
/// `friction`; once its magnitude drops below `stop_threshold` it snaps to zero
/// and the animation loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Per-tick multiplicative velocity decay, in (0, 1)
    #[serde(default = "default_friction")]
    pub friction: f64,
    /// Velocity magnitude below which motion is finished
    #[serde(default = "default_stop_threshold")]
    pub stop_threshold: f64,
    /// Hard limit on velocity magnitude
    #[serde(default = "default_max_velocity")]
    pub max_velocity: f64,
    /// Multiplier from wheel delta to impulse
    #[serde(default = "default_input_scale")]
    pub input_scale: f64,
    /// Largest impulse a single wheel event may contribute
    #[serde(default = "default_per_event_impulse_cap")]
    pub per_event_impulse_cap: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            friction: default_friction(),
            stop_threshold: default_stop_threshold(),
            max_velocity: default_max_velocity(),
            input_scale: default_input_scale(),
            per_event_impulse_cap: default_per_event_impulse_cap(),
        }
    }
}

impl ScrollConfig {
    /// Reject constants that would stall or diverge the animation loop
    pub fn validate(&self) -> crate::Result<()> {
        let fields = [
            ("friction", self.friction),
            ("stop_threshold", self.stop_threshold),
            ("max_velocity", self.max_velocity),
            ("input_scale", self.input_scale),
            ("per_event_impulse_cap", self.per_event_impulse_cap),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(crate::Error::Config(format!(
                    "scroll.{} must be a finite number, got {}",
                    name, value
                )));
            }
        }

        if self.friction <= 0.0 || self.friction >= 1.0 {
            return Err(crate::Error::Config(format!(
                "scroll.friction must be between 0 and 1 (exclusive), got {}",
                self.friction
            )));
        }

        let positive = [
            ("stop_threshold", self.stop_threshold),
            ("max_velocity", self.max_velocity),
            ("input_scale", self.input_scale),
            ("per_event_impulse_cap", self.per_event_impulse_cap),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(crate::Error::Config(format!(
                    "scroll.{} must be greater than 0, got {}",
                    name, value
                )));
            }
        }

        let longest = tick_bound(self.max_velocity, self);
        if longest > MAX_GLIDE_TICKS {
            return Err(crate::Error::Config(format!(
                "scroll.friction {} keeps a full-speed glide going for {} ticks (limit {})",
                self.friction, longest, MAX_GLIDE_TICKS
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frame period of the fixed-interval scheduler in milliseconds
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
    /// Delta reported for one mouse wheel notch (or one j/k press)
    #[serde(default = "default_wheel_delta")]
    pub wheel_delta: f64,
    /// Scroll offset units per terminal row
    #[serde(default = "default_row_height")]
    pub row_height: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval(),
            wheel_delta: default_wheel_delta(),
            row_height: default_row_height(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_friction() -> f64 {
    0.92 // ~8% velocity loss per tick
}

fn default_stop_threshold() -> f64 {
    0.1
}

fn default_max_velocity() -> f64 {
    80.0
}

fn default_input_scale() -> f64 {
    0.6
}

fn default_per_event_impulse_cap() -> f64 {
    8.0
}

fn default_frame_interval() -> u64 {
    16 // ~60fps
}

fn default_wheel_delta() -> f64 {
    100.0 // one notch, as browsers report it in pixel mode
}

fn default_row_height() -> f64 {
    16.0
}

impl AppConfig {
    /// Load configuration from a specific file, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn parse(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.scroll.validate()?;
        if self.ui.frame_interval_ms == 0 {
            return Err(crate::Error::Config(
                "ui.frame_interval_ms must be at least 1".to_string(),
            ));
        }
        if !(self.ui.row_height.is_finite() && self.ui.row_height > 0.0) {
            return Err(crate::Error::Config(format!(
                "ui.row_height must be greater than 0, got {}",
                self.ui.row_height
            )));
        }
        if !self.ui.wheel_delta.is_finite() {
            return Err(crate::Error::Config(format!(
                "ui.wheel_delta must be a finite number, got {}",
                self.ui.wheel_delta
            )));
        }
        Ok(())
    }

    /// Save configuration to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/inertia/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("inertia")
            .join("config.toml")
    }
}
