use crate::ServiceError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure of one repository operation. Each variant keeps the service's
/// message verbatim for display and the underlying error as source.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Account creation failed: {message} {location}")]
    IdentityCreation {
        message: String,
        #[source]
        source: ServiceError,
        location: ErrorLocation,
    },

    #[error("Authentication failed: {message} {location}")]
    Authentication {
        message: String,
        #[source]
        source: ServiceError,
        location: ErrorLocation,
    },

    #[error("Sign-out failed: {message} {location}")]
    SignOut {
        message: String,
        #[source]
        source: ServiceError,
        location: ErrorLocation,
    },

    #[error("Profile write for {identity_id} failed: {message} {location}")]
    ProfileWrite {
        identity_id: String,
        message: String,
        #[source]
        source: ServiceError,
        location: ErrorLocation,
    },

    #[error("Profile read for {identity_id} failed: {message} {location}")]
    ProfileRead {
        identity_id: String,
        message: String,
        #[source]
        source: ServiceError,
        location: ErrorLocation,
    },
}

impl RepositoryError {
    #[track_caller]
    pub fn identity_creation(source: ServiceError) -> Self {
        Self::IdentityCreation {
            message: source.message(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn authentication(source: ServiceError) -> Self {
        Self::Authentication {
            message: source.message(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn sign_out(source: ServiceError) -> Self {
        Self::SignOut {
            message: source.message(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_write(identity_id: impl Into<String>, source: ServiceError) -> Self {
        Self::ProfileWrite {
            identity_id: identity_id.into(),
            message: source.message(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_read(identity_id: impl Into<String>, source: ServiceError) -> Self {
        Self::ProfileRead {
            identity_id: identity_id.into(),
            message: source.message(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Service message suitable for a user-facing alert.
    pub fn message(&self) -> &str {
        match self {
            Self::IdentityCreation { message, .. }
            | Self::Authentication { message, .. }
            | Self::SignOut { message, .. }
            | Self::ProfileWrite { message, .. }
            | Self::ProfileRead { message, .. } => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
