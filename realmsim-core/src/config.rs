use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a [`RulesConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings the player toggles and expects to survive restarts.
///
/// Passed in explicitly; the rules engine never reads ambient storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSettings {
    pub tutorial_completed: bool,
    pub show_tooltips: bool,
    pub confirm_peace_deals: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            tutorial_completed: false,
            show_tooltips: true,
            confirm_peace_deals: true,
        }
    }
}

/// Rules engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Seed for the noble/peasant rebel choice.
    pub rebel_seed: u64,

    /// Cache formula results keyed by their arguments.
    pub memoize: bool,

    /// Notifications kept after pruning.
    pub max_notifications: usize,

    /// Autosave slots kept after pruning.
    pub autosaves_to_keep: usize,

    pub settings: PersistedSettings,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rebel_seed: 0,
            memoize: false,
            max_notifications: 50,
            autosaves_to_keep: 5,
            settings: PersistedSettings::default(),
        }
    }
}

impl RulesConfig {
    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_notifications == 0 {
            return Err(ConfigError::Invalid(
                "max_notifications must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
