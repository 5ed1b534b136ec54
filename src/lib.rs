pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

#[cfg(feature = "sdl")]
pub use adapters::sdl::Sdl2Library;

pub use config::{LogFormat, Settings};
pub use core::smoke::SmokeCheck;
pub use domain::{model::SmokeOutcome, ports::MediaLibrary};
pub use utils::error::{Result, SmokeError};
