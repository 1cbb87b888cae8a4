//! # Rental Actor
//!
//! Tracks which user holds which copies. Each [`Rental`] entity is one checked-out copy.
//!
//! ## Dependencies
//!
//! The actor runs with `Context = (UserClient, CatalogClient)`:
//!
//! - creating a rental looks the user up and checks a copy out of the catalog
//! - deleting a rental checks the copy back in
//!
//! Neither client is needed at construction time, so [`new()`] only builds the actor and
//! its client; dependencies are injected by `run(context)`. The [`RentalClient`] does
//! hold a [`CatalogClient`] of its own, for the title lookups `return_movie` performs before
//! touching the rental actor.
//!
//! ## Usage
//!
//! ```rust
//! use movie_store::model::{MovieCreate, UserCreate};
//! use movie_store::{catalog_actor, rental_actor, user_actor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (user_actor, users) = user_actor::new(8);
//!     let (catalog_actor, catalog) = catalog_actor::new(8);
//!     let (rental_actor, rentals) = rental_actor::new(8, catalog.clone());
//!
//!     tokio::spawn(user_actor.run(()));
//!     tokio::spawn(catalog_actor.run(()));
//!     tokio::spawn(rental_actor.run((users.clone(), catalog.clone())));
//!
//!     let alice = users
//!         .create_user(UserCreate { name: "Alice".into(), age: 31 })
//!         .await?;
//!     catalog.add_movie(MovieCreate::new("Heat")).await?;
//!
//!     let movie = rentals.rent(alice, "heat").await?;
//!     assert_eq!(movie.title, "Heat");
//!     assert!(rentals.rent(alice, "heat").await.is_err());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{CatalogClient, RentalClient};
use crate::model::Rental;
use resource_actor::ResourceActor;

/// Creates a new Rental actor and its client.
pub fn new(
    buffer_size: usize,
    catalog_client: CatalogClient,
) -> (ResourceActor<Rental>, RentalClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RentalClient::new(generic_client, catalog_client))
}
