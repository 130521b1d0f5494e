//! Error types for the theme core.
//!
//! ERROR HANDLING
//! ==============
//! None of these escape the resolver's public mutators. They exist so the
//! collaborator seams can report what went wrong, and the resolver turns them
//! into log records at the point where the failure is swallowed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned when parsing a theme mode token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The token is not one of `light`, `dark` or `system`.
    #[error("unknown theme mode: {0:?}")]
    UnknownMode(String),
}

/// Error reported by an [`IdentityClient`](crate::IdentityClient).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// No authenticated session exists.
    #[error("not authenticated")]
    Unauthenticated,

    /// The HTTP request could not be sent or did not complete.
    #[error("identity request failed: {0}")]
    Request(String),

    /// The identity service returned a non-success HTTP status.
    #[error("identity service responded with status {0}")]
    Status(u16),

    /// The response body could not be decoded as a user session.
    #[error("identity response decode failed: {0}")]
    Decode(String),

    /// The identity service is not reachable from this environment.
    #[error("identity service unavailable")]
    Unavailable,
}

/// Error reported by a [`KeyValueStore`](crate::KeyValueStore) write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing storage area does not exist in this environment.
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused the write (quota, private mode, ...).
    #[error("storage write failed: {0}")]
    Write(String),
}
