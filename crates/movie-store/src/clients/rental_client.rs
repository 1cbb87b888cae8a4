//! # Rental Client
//!
//! Rent and return on behalf of an explicit user.
//!
//! Renting is a single create: the rental actor's `on_create` hook does the user check and
//! the checkout. Returning needs the catalog first, to tell an unknown title apart from one
//! the user simply does not hold, so this client keeps its own [`CatalogClient`].
use crate::clients::CatalogClient;
use crate::model::{rental_records, Movie, Rental, RentalCreate, RentalRecords, StockEntry, UserId};
use crate::rental_actor::RentalError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Rental actor.
#[derive(Clone)]
pub struct RentalClient {
    inner: ResourceClient<Rental>,
    catalog: CatalogClient,
}

impl RentalClient {
    pub fn new(inner: ResourceClient<Rental>, catalog: CatalogClient) -> Self {
        Self { inner, catalog }
    }

    /// Checks one copy of `title` out to `user_id`.
    ///
    /// # Errors
    /// - [`RentalError::NotFoundOrUnavailable`] when the title is not stocked or has no copy left
    /// - [`RentalError::UnknownUser`] when `user_id` was never registered
    #[instrument(skip(self))]
    pub async fn rent(&self, user_id: UserId, title: &str) -> Result<Movie, RentalError> {
        debug!("Sending request");
        let params = RentalCreate {
            user_id,
            title: title.to_string(),
        };
        let id = self.inner.create(params).await.map_err(Self::map_error)?;

        let rental = self.get(id.clone()).await?.ok_or_else(|| {
            RentalError::ActorCommunicationError(format!("{id} missing right after creation"))
        })?;
        Ok(rental.movie)
    }

    /// Returns one copy of `title` held by `user_id` and yields the updated catalog listing.
    ///
    /// # Errors
    /// - [`RentalError::NotFound`] when the catalog has no such title
    /// - [`RentalError::NotRentedByUser`] when the user holds no copy of it
    #[instrument(skip(self))]
    pub async fn return_movie(
        &self,
        user_id: UserId,
        title: &str,
    ) -> Result<Vec<StockEntry>, RentalError> {
        let entry = self
            .catalog
            .find_by_title(title)
            .await?
            .ok_or_else(|| RentalError::NotFound {
                title: title.trim().to_string(),
            })?;

        let key = entry.key();
        let not_rented = || RentalError::NotRentedByUser {
            user_id,
            title: entry.title().to_string(),
        };

        let rental = self
            .list()
            .await?
            .into_iter()
            .find(|rental| rental.is_held_by(user_id, &key))
            .ok_or_else(not_rented)?;

        match self.inner.delete(rental.id.clone()).await {
            Ok(()) => {}
            Err(FrameworkError::NotFound(_)) => return Err(not_rented()),
            Err(e) => return Err(Self::map_error(e)),
        }
        info!(rental_id = %rental.id, "Rental closed");

        Ok(self.catalog.list_movies().await?)
    }

    /// User name to the lower-cased titles that user currently holds.
    #[instrument(skip(self))]
    pub async fn rented_movies(&self) -> Result<RentalRecords, RentalError> {
        Ok(rental_records(&self.list().await?))
    }
}

#[async_trait]
impl ActorClient<Rental> for RentalClient {
    type Error = RentalError;

    fn inner(&self) -> &ResourceClient<Rental> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<RentalError>()
            .unwrap_or_else(|e| RentalError::ActorCommunicationError(e.to_string()))
    }
}
