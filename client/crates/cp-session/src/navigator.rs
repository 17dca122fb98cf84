use crate::{
    NavigationError, NavigationResult, Route, ScreenGraph, SessionState, SessionWatch, SplashTimer,
    select_graph,
};

use cp_core::Identity;

use log::{debug, info};

/// Route stack inside the graph chosen by the gate.
///
/// Once the splash graph has been left it is never shown again. Entering a
/// graph (or a different identity signing in) resets the stack to the
/// graph's entry route.
pub struct Navigator {
    session: SessionWatch,
    splash: SplashTimer,
    session_open: bool,
    left_splash: bool,
    graph: ScreenGraph,
    identity: Option<Identity>,
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(session: SessionWatch, splash: SplashTimer) -> Self {
        let mut navigator = Self {
            session,
            splash,
            session_open: true,
            left_splash: false,
            graph: ScreenGraph::Splash,
            identity: None,
            stack: vec![Route::Splash],
        };
        navigator.evaluate();
        navigator
    }

    pub fn graph(&self) -> ScreenGraph {
        self.graph
    }

    /// Route on top of the stack.
    pub fn current(&self) -> &Route {
        // The stack is never empty: it always holds at least the entry route.
        self.stack.last().unwrap_or(&Route::Splash)
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn session(&self) -> SessionState {
        self.session.borrow().clone()
    }

    /// Signed-in identity as of the last evaluation.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Wait until the gate selects a different graph or a different identity
    /// signs in, and return the graph now shown.
    ///
    /// Returns `None` once nothing can change anymore (session closed and
    /// splash done). Cancel safe.
    pub async fn next_transition(&mut self) -> Option<ScreenGraph> {
        loop {
            tokio::select! {
                changed = self.session.changed(), if self.session_open => {
                    if changed.is_err() {
                        debug!("Session stream closed");
                        self.session_open = false;
                        continue;
                    }
                }
                _ = self.splash.wait(), if !self.splash.is_done() => {}
                else => return None,
            }

            if self.evaluate() {
                return Some(self.graph);
            }
        }
    }

    /// Go to `route` within the current graph. A route already on the stack
    /// is returned to (replacing its parameters); otherwise it is pushed.
    pub fn navigate(&mut self, route: Route) -> NavigationResult<()> {
        if !self.graph.contains(&route) {
            return Err(NavigationError::not_in_graph(route.name(), self.graph));
        }

        if let Some(index) = self.stack.iter().position(|r| r.same_screen(&route)) {
            self.stack.truncate(index);
        } else if matches!(route, Route::EditProfile { .. }) && self.current() != &Route::Home {
            return Err(NavigationError::invalid_origin(
                route.name(),
                Route::Home.name(),
                self.current().name(),
            ));
        }

        debug!("Navigate to {route}");
        self.stack.push(route);
        Ok(())
    }

    /// Pop the current route. Returns `false` at the root of the graph.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Re-run the gate. Returns `true` when the stack was reset.
    fn evaluate(&mut self) -> bool {
        let state = self.session.borrow_and_update().clone();

        let graph = if self.left_splash {
            select_graph(false, state.is_signed_in(), true)
        } else {
            select_graph(state.resolving, state.is_signed_in(), self.splash.is_done())
        };

        if graph != ScreenGraph::Splash {
            self.left_splash = true;
        }

        let identity_changed = state.identity != self.identity;
        self.identity = state.identity;

        if graph != self.graph || (identity_changed && graph == ScreenGraph::Authenticated) {
            info!("Showing {graph} screens");
            self.graph = graph;
            self.stack = vec![graph.entry()];
            return true;
        }
        false
    }
}
