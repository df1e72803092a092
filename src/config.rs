//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TAPSTICK_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use tapstick_input::{DEFAULT_DEADZONE, DEFAULT_JOYSTICK_RADIUS};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TAPSTICK_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional local overrides
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // TAPSTICK_INPUT__JOYSTICK_RADIUS=90 -> input.joystick_radius = 90
        figment = figment.merge(Env::prefixed("TAPSTICK_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controller cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate()
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tapstick".to_string(),
            width: 960,
            height: 540,
            fullscreen: false,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Maximum touch joystick deflection in pixels
    pub joystick_radius: f32,
    /// Gamepad stick magnitude treated as drift
    pub gamepad_deadzone: f32,
    /// Use the native gamepad backend when available
    pub gamepad_enabled: bool,
}

impl InputConfig {
    /// Check the tuning values keep the move vector finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.joystick_radius.is_finite() && self.joystick_radius > 0.0) {
            return Err(ConfigError::invalid(format!(
                "input.joystick_radius must be a positive number, got {}",
                self.joystick_radius
            )));
        }
        if !(0.0..1.0).contains(&self.gamepad_deadzone) {
            return Err(ConfigError::invalid(format!(
                "input.gamepad_deadzone must be in [0, 1), got {}",
                self.gamepad_deadzone
            )));
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            joystick_radius: DEFAULT_JOYSTICK_RADIUS,
            gamepad_deadzone: DEFAULT_DEADZONE,
            gamepad_enabled: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log controller output whenever it changes
    pub log_state_changes: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_state_changes: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
