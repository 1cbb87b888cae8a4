//! Pure data structures (DTOs) implementing the [`ActorEntity`](resource_actor::ActorEntity) trait.

pub mod movie;
pub mod rental;
pub mod user;

pub use movie::*;
pub use rental::*;
pub use user::*;
