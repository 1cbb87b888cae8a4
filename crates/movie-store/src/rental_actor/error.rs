//! Error types for the Rental actor.

use crate::catalog_actor::CatalogError;
use crate::model::UserId;
use thiserror::Error;

/// Outcome of a failed rent or return.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RentalError {
    /// Renting a title that is not stocked or has no copy left.
    #[error("Movie not found or not available: {title}")]
    NotFoundOrUnavailable { title: String },

    /// Returning a title the catalog has never stocked.
    #[error("Movie not found: {title}")]
    NotFound { title: String },

    /// Returning a stocked title the user holds no copy of.
    #[error("Movie not rented by the user: {title} ({user_id})")]
    NotRentedByUser { user_id: UserId, title: String },

    /// The acting user was never registered.
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
