use cp_config::{Backend, LogLevel};

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(about = "University profile client: register, sign in, view and edit your profile")]
#[command(version)]
pub struct Cli {
    /// Config directory (defaults to $CP_CONFIG_DIR, then ./.campus)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Backend to use: firebase or memory
    #[arg(long)]
    pub backend: Option<Backend>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}
