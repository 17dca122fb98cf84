use crate::ScreenGraph;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Rejected navigation request.
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("{route} is not part of the {graph} screens {location}")]
    NotInGraph {
        route: &'static str,
        graph: ScreenGraph,
        location: ErrorLocation,
    },

    #[error("{route} can only be opened from {required} (currently on {current}) {location}")]
    InvalidOrigin {
        route: &'static str,
        required: &'static str,
        current: &'static str,
        location: ErrorLocation,
    },
}

impl NavigationError {
    #[track_caller]
    pub fn not_in_graph(route: &'static str, graph: ScreenGraph) -> Self {
        Self::NotInGraph {
            route,
            graph,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_origin(
        route: &'static str,
        required: &'static str,
        current: &'static str,
    ) -> Self {
        Self::InvalidOrigin {
            route,
            required,
            current,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, NavigationError>;
