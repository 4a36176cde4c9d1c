use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use store::ThemeStore;
use watchface_themes::commands::{self, Cli};
use watchface_themes::config::{self, ConfigLoadResult};
use watchface_themes::error::{AppError, AppResult};
use watchface_themes::logger;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{}", e.user_message());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let app_config = match config::get_config() {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
            return Err(AppError::Config(msg.clone()));
        }
    };

    if let Err(e) = logger::setup_logger(app_config.logging(), cli.debug) {
        eprintln!("Warning: Failed to initialize logger: {e}");
    }

    let themes_dir = match &cli.themes_dir {
        Some(dir) => dir.clone(),
        None => app_config.themes_dir()?,
    };
    log::debug!("Using themes directory {}", themes_dir.display());

    let store = ThemeStore::local(themes_dir);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &store, &mut out)?;
    out.flush()?;
    Ok(())
}
