//! Terminal front end for the campus profile client.

pub mod app;
pub mod backend;
pub mod cli;
pub mod command;
pub mod effect;
pub mod error;
pub mod logger;
pub mod screens;

pub use app::{App, Flow, Step};
pub use backend::build_repository;
pub use command::{Command, CommandError, HELP};
pub use effect::{Effect, EffectOutcome, MountId, TaggedOutcome, run_effect};
pub use error::{AppError, Result as AppErrorResult};

#[cfg(test)]
mod tests;
