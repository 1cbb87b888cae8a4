//! ActorEntity trait implementation for the Rental domain type.
//!
//! A rental only exists while its copy is checked out: `on_create` takes the copy from the
//! catalog and `on_delete` puts it back, so the catalog and the rental records never disagree.

use super::error::RentalError;
use crate::catalog_actor::CatalogError;
use crate::clients::{CatalogClient, UserClient};
use crate::model::{Rental, RentalCreate, RentalId};
use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Rental {
    type Id = RentalId;
    type Create = RentalCreate;
    type Action = ();
    type ActionResult = ();
    type Context = (UserClient, CatalogClient);
    type Error = RentalError;

    fn id_for(seq: u32, _params: &RentalCreate) -> RentalId {
        RentalId(seq)
    }

    fn from_create_params(id: RentalId, params: RentalCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.user_id, &params.title))
    }

    /// Resolves the user and checks one copy out of the catalog.
    ///
    /// # Errors
    /// - [`RentalError::UnknownUser`] if the user is not registered
    /// - [`RentalError::NotFoundOrUnavailable`] if the title is missing or out of stock
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (user_client, catalog_client) = ctx;

        debug!(user_id = %self.user_id, "Validating user");
        let user = user_client
            .get(self.user_id)
            .await
            .map_err(|e| RentalError::ActorCommunicationError(e.to_string()))?
            .ok_or(RentalError::UnknownUser(self.user_id))?;
        self.user_name = user.name;

        debug!(title = %self.key, "Checking out copy");
        let requested = self.movie.title.clone();
        self.movie = catalog_client
            .checkout(self.key.as_str())
            .await
            .map_err(|e| match e {
                CatalogError::NotFound(_) | CatalogError::Unavailable { .. } => {
                    RentalError::NotFoundOrUnavailable { title: requested }
                }
                other => RentalError::Catalog(other),
            })?;

        info!(rental_id = %self.id, user = %self.user_name, title = %self.movie, "Movie rented");
        Ok(())
    }

    /// Checks the held copy back in.
    async fn on_delete(&self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (_, catalog_client) = ctx;
        catalog_client.check_in(self.key.as_str()).await?;
        info!(rental_id = %self.id, user = %self.user_name, title = %self.movie, "Movie returned");
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
