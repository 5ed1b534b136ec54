use anyhow::Context;
use sdl_smoke::utils::logger;
use sdl_smoke::{CliConfig, Sdl2Library, Settings, SmokeCheck, SmokeError, SmokeOutcome};

fn main() {
    let config = CliConfig::parse_lenient(std::env::args_os());

    let settings = match config.resolve().context("Failed to load configuration") {
        Ok(settings) => settings,
        Err(e) => exit_with_error(&e),
    };

    // 初始化日誌
    logger::init_cli_logger(
        settings.verbose,
        settings.log_level.as_deref(),
        settings.log_format,
    );

    tracing::info!("🚀 Starting sdl-smoke");
    if let Some(warning) = &config.parse_warning {
        tracing::warn!("⚠️ Ignoring command line arguments: {}", warning);
    }
    if !config.ignored.is_empty() {
        tracing::debug!("Ignoring arguments: {:?}", config.ignored);
    }
    tracing::debug!("Settings: {:?}", settings);

    match run(&settings) {
        Ok(outcome) if outcome.is_success() => {
            tracing::info!("✅ Video subsystem check passed");
            std::process::exit(outcome.exit_code());
        }
        Ok(outcome) => {
            let exit_code = outcome.exit_code();
            if let Err(e) = outcome.into_result() {
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            }
            std::process::exit(exit_code);
        }
        Err(e) => exit_with_error(&e),
    }
}

fn run(settings: &Settings) -> anyhow::Result<SmokeOutcome> {
    let library = Sdl2Library::with_hints(settings.sdl_hints());
    let stdout = std::io::stdout().lock();

    let mut check = SmokeCheck::new_with_monitoring(library, stdout, settings.monitor);
    check.run().context("Smoke check aborted")
}

fn exit_with_error(e: &anyhow::Error) -> ! {
    eprintln!("❌ {:#}", e);

    let exit_code = match e.downcast_ref::<SmokeError>() {
        Some(smoke_error) => {
            eprintln!("💡 Suggestion: {}", smoke_error.recovery_suggestion());
            if smoke_error.is_config_error() {
                eprintln!("💡 Run with --help to list the supported options");
            }
            smoke_error.exit_code()
        }
        None => 1,
    };
    std::process::exit(exit_code);
}
