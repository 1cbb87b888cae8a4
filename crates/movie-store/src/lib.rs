//! # Movie Store
//!
//! An in-memory movie-rental store built on [`resource_actor`]: a catalog of titles with copy
//! counts, registered users, and the rentals that connect them.
//!
//! - [`model`]: plain data ([`Movie`](model::Movie), [`StockEntry`](model::StockEntry),
//!   [`User`](model::User), [`Rental`](model::Rental))
//! - [`catalog_actor`], [`user_actor`], [`rental_actor`]: one actor per resource
//! - [`clients`]: typed APIs over the actors
//! - [`lifecycle`]: [`RentalSystem`](lifecycle::RentalSystem), which starts and stops them
//! - [`prompt`]: collects the customer's name and age
//! - [`config`]: [`StoreConfig`](config::StoreConfig)

pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod prompt;
pub mod rental_actor;
pub mod user_actor;
