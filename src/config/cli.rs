use crate::config::toml_config::TomlConfig;
use crate::config::{LogFormat, Settings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "sdl-smoke", version)]
#[command(about = "Check that the SDL video subsystem initializes and shuts down cleanly")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// SDL video driver to request (sets SDL_VIDEODRIVER), e.g. x11, wayland, dummy
    #[arg(long, value_name = "NAME")]
    pub video_driver: Option<String>,

    /// Extra SDL hint applied before initialization (repeatable)
    #[arg(long = "hint", value_name = "NAME=VALUE", value_parser = parse_hint)]
    pub hints: Vec<(String, String)>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(long, help = "Log process CPU and memory usage around the check")]
    pub monitor: bool,

    /// 其他參數一律接受但不使用
    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// 命令列無法解析時的原因，等日誌初始化後再回報
    #[arg(skip)]
    pub parse_warning: Option<String>,
}

fn parse_hint(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

// clap 以 "--flag <VALUE>" 或 "-p" 形式回報出錯的參數，只比對旗標本身
fn rejected_position(e: &clap::Error, args: &[OsString]) -> Option<usize> {
    let invalid = match e.get(ContextKind::InvalidArg)? {
        ContextValue::String(invalid) => invalid.split_whitespace().next()?,
        _ => return None,
    };

    args.iter()
        .skip(1)
        .position(|arg| arg.to_str().is_some_and(|arg| arg.starts_with(invalid)))
        .map(|position| position + 1)
}

impl CliConfig {
    /// Parses the command line without ever rejecting it.
    ///
    /// `--help` and `--version` still print and exit. An argument clap
    /// rejects is dropped and parsing is retried, so the remaining valid
    /// flags still apply. When the culprit cannot be located the defaults
    /// are used. Every rejection is recorded in `parse_warning`.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut warnings = Vec::new();

        loop {
            let e = match Self::try_parse_from(args.iter().cloned()) {
                Ok(mut config) => {
                    if !warnings.is_empty() {
                        config.parse_warning = Some(warnings.join("; "));
                    }
                    return config;
                }
                Err(e) => e,
            };

            match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
                _ => {}
            }

            let message = e.to_string();
            warnings.push(
                message
                    .lines()
                    .next()
                    .unwrap_or("unrecognized arguments")
                    .trim_start_matches("error: ")
                    .to_string(),
            );

            match rejected_position(&e, &args) {
                Some(position) => {
                    args.remove(position);
                }
                None => {
                    return Self {
                        parse_warning: Some(warnings.join("; ")),
                        ..Self::default()
                    };
                }
            }
        }
    }

    /// 疊加設定：預設值 < 設定檔 < 命令列
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Settings::from_toml(&file)
            }
            None => Settings::default(),
        };

        if let Some(driver) = &self.video_driver {
            settings.video_driver = Some(driver.clone());
        }
        for (name, value) in &self.hints {
            settings.hints.insert(name.clone(), value.clone());
        }
        if let Some(format) = self.log_format {
            settings.log_format = format;
        }
        settings.verbose = self.verbose;
        settings.monitor |= self.monitor;

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SmokeError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_arguments() {
        let config = CliConfig::parse_lenient(["sdl-smoke"]);
        assert!(config.parse_warning.is_none());

        let settings = config.resolve().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_stray_arguments_are_ignored() {
        let config = CliConfig::parse_lenient(["sdl-smoke", "foo", "bar"]);
        assert!(config.parse_warning.is_none());
        assert_eq!(config.ignored, vec!["foo".to_string(), "bar".to_string()]);
        assert_eq!(config.resolve().unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_flag_falls_back_to_defaults() {
        let config = CliConfig::parse_lenient(["sdl-smoke", "--fullscreen", "-psn_0_12345"]);
        assert!(config.parse_warning.is_some());
        assert!(config.video_driver.is_none());
        assert_eq!(config.resolve().unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_flag_keeps_valid_flags() {
        let config = CliConfig::parse_lenient([
            "sdl-smoke",
            "--video-driver",
            "dummy",
            "--fullscreen",
            "--monitor",
        ]);

        assert_eq!(config.video_driver.as_deref(), Some("dummy"));
        assert!(config.monitor);
        let warning = config.parse_warning.as_deref().unwrap();
        assert!(warning.contains("--fullscreen"));
    }

    #[test]
    fn test_bad_flag_value_drops_only_that_flag() {
        let config = CliConfig::parse_lenient([
            "sdl-smoke",
            "--log-format",
            "xml",
            "--video-driver",
            "dummy",
        ]);

        assert!(config.log_format.is_none());
        assert_eq!(config.video_driver.as_deref(), Some("dummy"));
        assert!(config.parse_warning.is_some());
    }

    #[test]
    fn test_flags_parsed() {
        let config = CliConfig::parse_lenient([
            "sdl-smoke",
            "--video-driver",
            "dummy",
            "--hint",
            "SDL_VIDEO_ALLOW_SCREENSAVER=1",
            "--log-format",
            "json",
            "-v",
        ]);
        let settings = config.resolve().unwrap();

        assert_eq!(settings.video_driver.as_deref(), Some("dummy"));
        assert_eq!(settings.log_format, LogFormat::Json);
        assert!(settings.verbose);
        assert_eq!(
            settings.hints.get("SDL_VIDEO_ALLOW_SCREENSAVER").map(String::as_str),
            Some("1")
        );
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            "[video]\ndriver = \"x11\"\n\n[logging]\nlevel = \"info\"\n\n[monitoring]\nenabled = true"
        )
        .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let config = CliConfig::parse_lenient([
            "sdl-smoke",
            "--config",
            path.as_str(),
            "--video-driver",
            "dummy",
        ]);
        let settings = config.resolve().unwrap();

        assert_eq!(settings.video_driver.as_deref(), Some("dummy"));
        assert_eq!(settings.log_level.as_deref(), Some("info"));
        assert!(settings.monitor);
    }

    #[test]
    fn test_invalid_driver_rejected() {
        let config = CliConfig::parse_lenient(["sdl-smoke", "--video-driver", "x11;rm"]);
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, SmokeError::InvalidConfigValueError { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_hint() {
        assert_eq!(
            parse_hint("SDL_A=b=c").unwrap(),
            ("SDL_A".to_string(), "b=c".to_string())
        );
        assert!(parse_hint("novalue").is_err());
        assert!(parse_hint("=1").is_err());
    }
}
