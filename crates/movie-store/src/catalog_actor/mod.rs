//! # Catalog Actor
//!
//! Owns the store's stock: one [`StockEntry`] per title, in the order titles were added.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`StockEntry`]
//! - [`error`] - [`CatalogError`]
//! - [`actions`] - [`StockAction`] and [`StockActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use movie_store::catalog_actor;
//! use movie_store::model::MovieCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     client.add_movie(MovieCreate::new("Heat").with_copies(2)).await?;
//!     client.checkout("heat").await?;
//!     assert_eq!(client.check_stock("HEAT").await?, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Stock Rules
//!
//! - `available_copies` stays within `0..=total_copies`
//! - `Checkout` fails on an empty shelf, `CheckIn` fails on a full one
//! - Adding a title that already exists restocks it

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CatalogClient;
use crate::model::StockEntry;
use resource_actor::ResourceActor;

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<StockEntry>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CatalogClient::new(generic_client))
}
