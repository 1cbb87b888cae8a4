//! # Resource Actor
//!
//! Building blocks for type-safe resource actors on Tokio. Each resource type gets one
//! actor that owns its entities; everything else talks to it through a cloneable client.
//!
//! ## Resource-Oriented Actors
//!
//! - **Resources**: every entity type shares the same lifecycle API (Create, Get, List,
//!   Delete) plus its own typed `Action`s for operations that do not fit the lifecycle.
//! - **Actors**: an actor owns its store inside one task and handles requests in arrival
//!   order, so entity state needs no locks.
//! - **Coordination**: when resources interact (a rental checking out a catalog copy) they
//!   send each other action messages through clients injected as the actor's `Context`.
//!
//! ## Quick Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Reel { id: u32, spins: u32 }
//! #[derive(Debug)] struct ReelCreate;
//! #[derive(Debug)] enum ReelAction { Spin }
//! #[derive(Debug, thiserror::Error)] #[error("reel error")] struct ReelError;
//!
//! #[async_trait]
//! impl ActorEntity for Reel {
//!     type Id = u32;
//!     type Create = ReelCreate;
//!     type Action = ReelAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = ReelError;
//!
//!     fn id_for(seq: u32, _: &ReelCreate) -> u32 { seq }
//!
//!     fn from_create_params(id: u32, _: ReelCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, spins: 0 })
//!     }
//!
//!     async fn handle_action(&mut self, action: ReelAction, _: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             ReelAction::Spin => {
//!                 self.spins += 1;
//!                 Ok(self.spins)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Reel>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(ReelCreate).await.unwrap();
//!     assert_eq!(client.perform_action(id, ReelAction::Spin).await.unwrap(), 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor starts (`run(context)`), not when it is
//! constructed, so actors that depend on each other can all be created first and wired
//! afterwards. An entity that needs other actors declares them as its context:
//!
//! ```rust,ignore
//! impl ActorEntity for Rental {
//!     type Context = (UserClient, CatalogClient);
//!     // ...
//! }
//! ```
//!
//! ## Errors
//!
//! Each entity has one error type. The actor boxes it into
//! [`FrameworkError::EntityError`] and clients recover it with
//! [`FrameworkError::downcast_entity`], so callers match on domain variants rather than
//! strings.
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient` and low-level request helpers for testing code
//! that talks to an actor without spawning it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
