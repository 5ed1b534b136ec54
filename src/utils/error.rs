use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("SDL_Init failed: {message}")]
    InitFailed { message: String },

    #[error("Console output failed: {0}")]
    OutputError(#[source] std::io::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SmokeError {
    /// 對應的行程退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            SmokeError::InitFailed { .. } => 1,
            SmokeError::IoError(_)
            | SmokeError::ConfigValidationError { .. }
            | SmokeError::InvalidConfigValueError { .. } => 2,
            SmokeError::OutputError(_) => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SmokeError::InitFailed { .. } => {
                "Check that a display is available, or select another driver with --video-driver (e.g. 'dummy')"
            }
            SmokeError::OutputError(_) => "Make sure standard output is writable (not a closed pipe)",
            SmokeError::IoError(_) => "Check that the configuration file exists and is readable",
            SmokeError::ConfigValidationError { .. } => "Fix the TOML syntax in the configuration file",
            SmokeError::InvalidConfigValueError { .. } => {
                "Correct the offending value in the configuration file or on the command line"
            }
        }
    }

    pub fn is_config_error(&self) -> bool {
        self.exit_code() == 2
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let init = SmokeError::InitFailed {
            message: "No available video device".to_string(),
        };
        assert_eq!(init.exit_code(), 1);
        assert_eq!(init.to_string(), "SDL_Init failed: No available video device");

        let invalid = SmokeError::InvalidConfigValueError {
            field: "video.driver".to_string(),
            value: "".to_string(),
            reason: "Driver name cannot be empty".to_string(),
        };
        assert_eq!(invalid.exit_code(), 2);
        assert!(invalid.is_config_error());

        let output = SmokeError::OutputError(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(output.exit_code(), 3);
        assert!(!output.is_config_error());
    }
}
