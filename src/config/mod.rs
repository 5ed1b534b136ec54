#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use toml_config::TomlConfig;

#[cfg(feature = "sdl")]
use crate::adapters::sdl::VIDEO_DRIVER_HINT;
#[cfg(not(feature = "sdl"))]
const VIDEO_DRIVER_HINT: &str = "SDL_VIDEODRIVER";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Effective settings after layering defaults, the TOML file and CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub video_driver: Option<String>,
    pub hints: BTreeMap<String, String>,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub monitor: bool,
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            video_driver: config.video.driver.clone(),
            hints: config.hints.clone(),
            verbose: false,
            log_level: config.logging.level.clone(),
            log_format: config.logging.format.unwrap_or_default(),
            monitor: config.monitoring_enabled(),
        }
    }

    /// 交給 SDL 的提示；`video_driver` 會覆蓋同名的 `SDL_VIDEODRIVER`
    pub fn sdl_hints(&self) -> Vec<(String, String)> {
        let mut hints = self.hints.clone();
        if let Some(driver) = &self.video_driver {
            hints.insert(VIDEO_DRIVER_HINT.to_string(), driver.clone());
        }
        hints.into_iter().collect()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(driver) = &self.video_driver {
            validation::validate_driver_name("video_driver", driver)?;
        }
        for (name, value) in &self.hints {
            validation::validate_hint("hint", name, value)?;
        }
        if let Some(level) = &self.log_level {
            validation::validate_log_level("log_level", level)?;
        }
        Ok(())
    }
}
