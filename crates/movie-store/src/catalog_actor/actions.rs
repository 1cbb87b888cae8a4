//! Custom actions for the catalog actor.
//!
//! Stock operations on one [`StockEntry`](crate::model::StockEntry), handled by
//! [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action).

use crate::model::Movie;

/// Custom actions for StockEntry entities.
#[derive(Debug, Clone)]
pub enum StockAction {
    /// Reads the available copy count without modifying it.
    CheckStock,
    /// Takes one copy off the shelf.
    ///
    /// # Errors
    /// Fails with [`CatalogError::Unavailable`](super::CatalogError::Unavailable) when no copy is left.
    Checkout,
    /// Puts one copy back on the shelf.
    ///
    /// # Errors
    /// Fails with [`CatalogError::FullyStocked`](super::CatalogError::FullyStocked) when every
    /// owned copy is already on the shelf.
    CheckIn,
    /// Adds newly acquired copies to both the available and the owned count.
    ///
    /// # Errors
    /// Fails with [`CatalogError::TooManyCopies`](super::CatalogError::TooManyCopies) when a
    /// count would overflow; the entry is left unchanged.
    Restock(u32),
}

/// Results from StockActions - variants match 1:1 with StockAction
#[derive(Debug, Clone)]
pub enum StockActionResult {
    /// Current available copies
    CheckStock(u32),
    /// The movie whose copy was taken
    Checkout(Movie),
    /// Available copies after the check-in
    CheckIn(u32),
    /// Available copies after restocking
    Restock(u32),
}
