//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).

pub mod catalog_client;
pub mod rental_client;
pub mod user_client;

pub use catalog_client::*;
pub use rental_client::*;
pub use user_client::*;
