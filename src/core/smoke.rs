use crate::core::{MediaLibrary, Result, SmokeOutcome};
use crate::utils::error::SmokeError;
use crate::utils::monitor::SystemMonitor;
use std::io::Write;

pub const STARTING: &str = "Starting SDL test...";
pub const INITIALIZED: &str = "SDL initialized";
pub const INIT_FAILED_PREFIX: &str = "SDL_Init failed: ";
pub const DONE: &str = "Done";

/// Initializes the video subsystem once, reports each step on `out` and
/// releases the subsystem again on success.
pub struct SmokeCheck<L: MediaLibrary, W: Write> {
    library: L,
    out: W,
    monitor: SystemMonitor,
}

impl<L: MediaLibrary, W: Write> SmokeCheck<L, W> {
    pub fn new(library: L, out: W) -> Self {
        Self::new_with_monitoring(library, out, false)
    }

    pub fn new_with_monitoring(library: L, out: W, monitor_enabled: bool) -> Self {
        let monitor = SystemMonitor::new(monitor_enabled);
        if monitor.is_enabled() {
            tracing::info!("🔍 Process monitoring enabled");
        }

        Self {
            library,
            out,
            monitor,
        }
    }

    pub fn run(&mut self) -> Result<SmokeOutcome> {
        self.emit(STARTING)?;
        self.monitor.log_stats("Before init");

        tracing::debug!("Initializing video subsystem");
        match self.library.init_video() {
            Err(message) => {
                tracing::error!("❌ Video subsystem initialization failed: {}", message);
                self.emit(&format!("{}{}", INIT_FAILED_PREFIX, message))?;
                Ok(SmokeOutcome::InitFailed { message })
            }
            Ok(()) => {
                tracing::info!("✅ Video subsystem initialized");
                // 無論輸出是否成功都要先釋放子系統
                let reported = self.emit(INITIALIZED);
                self.library.shutdown();
                tracing::debug!("Video subsystem shut down");
                reported?;

                self.emit(DONE)?;
                self.monitor.log_stats("After shutdown");
                Ok(SmokeOutcome::Initialized)
            }
        }
    }

    pub fn into_parts(self) -> (L, W) {
        (self.library, self.out)
    }

    // 每行都立即 flush，行程異常結束時輸出仍可見
    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line).map_err(SmokeError::OutputError)?;
        self.out.flush().map_err(SmokeError::OutputError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StubLibrary {
        fail_with: Option<String>,
        shutdowns: usize,
    }

    impl MediaLibrary for StubLibrary {
        fn init_video(&mut self) -> std::result::Result<(), String> {
            match &self.fail_with {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            }
        }

        fn shutdown(&mut self) {
            self.shutdowns += 1;
        }
    }

    #[test]
    fn test_success_path_output() {
        let mut check = SmokeCheck::new(StubLibrary::default(), Vec::new());
        let outcome = check.run().unwrap();
        let (library, out) = check.into_parts();

        assert_eq!(outcome, SmokeOutcome::Initialized);
        assert_eq!(library.shutdowns, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Starting SDL test...\nSDL initialized\nDone\n"
        );
    }

    #[test]
    fn test_failure_path_output() {
        let library = StubLibrary {
            fail_with: Some("No available video device".to_string()),
            ..Default::default()
        };
        let mut check = SmokeCheck::new(library, Vec::new());
        let outcome = check.run().unwrap();
        let (library, out) = check.into_parts();

        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(library.shutdowns, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Starting SDL test...\nSDL_Init failed: No available video device\n"
        );
    }
}
