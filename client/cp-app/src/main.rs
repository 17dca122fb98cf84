//! campus - university profile client
//!
//! ```bash
//! # Offline run against the in-memory backend
//! campus --backend memory
//!
//! # Firebase project configured in ./.campus/config.toml or .env
//! campus --log-level debug
//! ```

use cp_app::cli::Cli;
use cp_app::{App, AppError, AppErrorResult, build_repository, logger};
use cp_config::Config;
use cp_session::{Navigator, SessionHolder, SplashTimer};

use std::process::ExitCode;

use clap::Parser;
use log::info;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AppErrorResult<()> {
    let cli = Cli::parse();

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    // Load, apply flags, then validate
    let mut config = Config::load_from(&config_dir)?;
    if let Some(backend) = cli.backend {
        config.app.backend = backend;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    let log_file = config.log_file_path_in(&config_dir);
    if let Some(parent) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::io(format!("Failed to create {}", parent.display()), e))?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting campus v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let repository = build_repository(&config)?;

    let mut session = SessionHolder::start(
        repository.identity_service(),
        config.session.min_resolve_delay(),
    );
    let navigator = Navigator::new(
        session.subscribe(),
        SplashTimer::start(config.splash.min_display()),
    );

    let app = App::new(repository, navigator, cp_core::current_year());
    let result = app.run(BufReader::new(tokio::io::stdin())).await;

    session.shutdown().await;
    result
}
