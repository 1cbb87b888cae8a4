//! ActorEntity trait implementation for the StockEntry domain type.
//!
//! Catalog entries are keyed by [`TitleKey`], so a second `add` of the same title collides
//! in the actor instead of creating an unreachable duplicate.

use super::actions::{StockAction, StockActionResult};
use super::error::CatalogError;
use crate::model::{Movie, MovieCreate, StockEntry, TitleKey};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for StockEntry {
    type Id = TitleKey;
    type Create = MovieCreate;
    type Action = StockAction;
    type ActionResult = StockActionResult;
    type Context = ();
    type Error = CatalogError;

    fn id_for(_seq: u32, params: &MovieCreate) -> TitleKey {
        TitleKey::new(&params.title)
    }

    /// Creates a new StockEntry with every copy on the shelf.
    fn from_create_params(_id: TitleKey, params: MovieCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(Movie::new(&params.title), params.copies))
    }

    /// Handles stock actions.
    ///
    /// # Actions
    /// - `CheckStock`: returns the available count
    /// - `Checkout`: decrements if a copy is available
    /// - `CheckIn`: increments if a copy is out
    /// - `Restock`: grows both counts, refused if either would overflow
    async fn handle_action(
        &mut self,
        action: StockAction,
        _ctx: &Self::Context,
    ) -> Result<StockActionResult, Self::Error> {
        match action {
            StockAction::CheckStock => Ok(StockActionResult::CheckStock(self.available_copies)),
            StockAction::Checkout => {
                if self.available_copies == 0 {
                    return Err(CatalogError::Unavailable {
                        title: self.movie.title.clone(),
                    });
                }
                self.available_copies -= 1;
                Ok(StockActionResult::Checkout(self.movie.clone()))
            }
            StockAction::CheckIn => {
                if self.available_copies >= self.total_copies {
                    return Err(CatalogError::FullyStocked {
                        title: self.movie.title.clone(),
                        total: self.total_copies,
                    });
                }
                self.available_copies += 1;
                Ok(StockActionResult::CheckIn(self.available_copies))
            }
            StockAction::Restock(copies) => {
                let (Some(available), Some(total)) = (
                    self.available_copies.checked_add(copies),
                    self.total_copies.checked_add(copies),
                ) else {
                    return Err(CatalogError::TooManyCopies {
                        title: self.movie.title.clone(),
                    });
                };
                self.available_copies = available;
                self.total_copies = total;
                Ok(StockActionResult::Restock(available))
            }
        }
    }
}
