//! Pure mapping from session and splash state to the active screen graph.

mod route;
mod screen_graph;

pub use route::Route;
pub use screen_graph::ScreenGraph;

/// Select the screen graph to show.
///
/// Splash wins while the session is resolving or the splash has not yet
/// been shown for its minimum time; afterwards the presence of an identity
/// decides.
pub fn select_graph(resolving: bool, identity_present: bool, splash_done: bool) -> ScreenGraph {
    if resolving || !splash_done {
        ScreenGraph::Splash
    } else if identity_present {
        ScreenGraph::Authenticated
    } else {
        ScreenGraph::Unauthenticated
    }
}
