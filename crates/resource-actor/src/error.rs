//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, plus the wrapper that carries an entity's own
//! error back to the client.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error wrapped in [`FrameworkError::EntityError`].
    ///
    /// Returns the original error unchanged when it is a framework error or wraps an
    /// error of a different type.
    ///
    /// ```rust
    /// use resource_actor::FrameworkError;
    ///
    /// #[derive(Debug, thiserror::Error, PartialEq)]
    /// #[error("sold out")]
    /// struct SoldOut;
    ///
    /// let err = FrameworkError::EntityError(Box::new(SoldOut));
    /// assert_eq!(err.downcast_entity::<SoldOut>().unwrap(), SoldOut);
    ///
    /// let err = FrameworkError::ActorClosed;
    /// assert!(matches!(err.downcast_entity::<SoldOut>(), Err(FrameworkError::ActorClosed)));
    /// ```
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
