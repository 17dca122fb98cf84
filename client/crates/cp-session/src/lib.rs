//! Authentication state and screen gating.
//!
//! Identity notifications flow one way: [`SessionHolder`] turns the identity
//! service's change stream into a [`SessionState`], the [`gate`] maps that
//! state (plus the [`SplashTimer`]) onto a screen graph, and the
//! [`Navigator`] keeps the route stack inside the selected graph.

pub mod error;
pub mod gate;
pub mod navigator;
pub mod session_holder;
pub mod session_state;
pub mod splash_timer;

pub use error::{NavigationError, Result as NavigationResult};
pub use gate::{Route, ScreenGraph, select_graph};
pub use navigator::Navigator;
pub use session_holder::SessionHolder;
pub use session_state::{SessionState, SessionWatch};
pub use splash_timer::SplashTimer;

#[cfg(test)]
mod tests;
