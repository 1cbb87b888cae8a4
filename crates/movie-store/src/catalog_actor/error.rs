//! Error types for the catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No entry matches the requested title.
    #[error("Movie not found: {0}")]
    NotFound(String),

    /// The entry exists but every copy is rented out.
    #[error("Movie not available: {title}")]
    Unavailable { title: String },

    /// A check-in would put more copies on the shelf than the store owns.
    #[error("All {total} copies of {title} are already in stock")]
    FullyStocked { title: String, total: u32 },

    /// Restocking would push a copy count past `u32::MAX`.
    #[error("Too many copies of {title}")]
    TooManyCopies { title: String },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
