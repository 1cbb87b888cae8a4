//! # User Actor
//!
//! Registers store customers. The simplest actor in the store: no dependencies and no custom
//! actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use movie_store::user_actor;
//! use movie_store::model::{UserCreate, UserId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = UserCreate {
//!         name: "Alice".to_string(),
//!         age: 31,
//!     };
//!     let id = client.create_user(params).await?;
//!     assert_eq!(id, UserId(1));
//!     Ok(())
//! }
//! ```
//!
//! Ids come from the actor's create sequence, so the first user is `user_1`.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
