//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (a catalog entry, a user, a rental, …)
//! implements to be managed by the generic `ResourceActor`. It names the key, the creation
//! payload, the custom actions, the injected context and the error type, and provides the
//! lifecycle hooks (`on_create`, `on_delete`, `handle_action`).
//!
//! # Keys
//! Entities choose their own key through [`ActorEntity::id_for`]. The actor hands it a
//! monotonically increasing sequence number together with the creation payload, so an entity
//! can either use the sequence (`user_1`, `rental_7`) or derive a natural key from the payload
//! (a normalized movie title). Keys must be unique inside one actor; a create that resolves to
//! a stored key is rejected with [`FrameworkError::AlreadyExists`](crate::FrameworkError::AlreadyExists).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The `Context` type is
/// injected into every hook, which lets dependencies be bound when the actor starts running
/// (`run(context)`) instead of when it is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique key for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Checkout`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor, shared by every hook and action. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) with
    /// [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Picks the key for a new entity.
    ///
    /// `seq` starts at 1 and grows with every create request the actor receives.
    fn id_for(seq: u32, params: &Self::Create) -> Self::Id;

    /// Construct the full Entity from the key and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// An error here discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed.
    /// An error here keeps the entity in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
