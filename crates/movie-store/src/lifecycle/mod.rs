//! # System Lifecycle
//!
//! Starting, wiring and stopping the store's actors.
//!
//! ## Wiring
//!
//! Actors are created without dependencies and receive them when they start running:
//!
//! ```rust,ignore
//! let (user_actor, user_client) = user_actor::new(capacity);
//! let (catalog_actor, catalog_client) = catalog_actor::new(capacity);
//! let (rental_actor, rental_client) = rental_actor::new(capacity, catalog_client.clone());
//!
//! tokio::spawn(user_actor.run(()));
//! tokio::spawn(catalog_actor.run(()));
//! tokio::spawn(rental_actor.run((user_client.clone(), catalog_client.clone())));
//! ```
//!
//! The dependency graph is acyclic (rental → user, rental → catalog), so dropping the
//! clients is enough to stop everything:
//!
//! 1. [`RentalSystem::shutdown`] drops its clients
//! 2. the rental actor's channel closes and it exits, dropping the context clients it held
//! 3. the user and catalog channels close and those actors exit
//! 4. every task handle is awaited
//!
//! Clients cloned out of the system keep their actor alive until they are dropped too.
//!
//! ## Observability
//!
//! Call [`setup_tracing`](resource_actor::tracing::setup_tracing) once at start-up; logs
//! go to stderr and follow `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run -p movie-store     # lifecycle events
//! RUST_LOG=debug cargo run -p movie-store    # every request
//! ```

pub mod rental_system;

pub use rental_system::*;
