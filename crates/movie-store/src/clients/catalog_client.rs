//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the catalog actor.
//! Every method takes a title as typed by the caller; it is normalized into a
//! [`TitleKey`] before it reaches the actor.
use crate::catalog_actor::{CatalogError, StockAction, StockActionResult};
use crate::model::{Movie, MovieCreate, StockEntry, TitleKey};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<StockEntry>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<StockEntry>) -> Self {
        Self { inner }
    }

    /// Stocks a title.
    ///
    /// A title that is already stocked keeps its single entry and is restocked with
    /// `params.copies` instead.
    #[instrument(skip(self))]
    pub async fn add_movie(&self, params: MovieCreate) -> Result<TitleKey, CatalogError> {
        debug!("Sending request");
        let key = TitleKey::new(&params.title);
        let copies = params.copies;

        match self.inner.create(params).await {
            Ok(key) => Ok(key),
            Err(FrameworkError::AlreadyExists(_)) => {
                info!(title = %key, copies, "Title already stocked, restocking");
                self.restock(key.as_str(), copies).await?;
                Ok(key)
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Every stocked title with its current counts, in the order titles were first added.
    #[instrument(skip(self))]
    pub async fn list_movies(&self) -> Result<Vec<StockEntry>, CatalogError> {
        self.list().await
    }

    /// Case- and whitespace-insensitive lookup.
    #[instrument(skip(self))]
    pub async fn find_by_title(&self, title: &str) -> Result<Option<StockEntry>, CatalogError> {
        self.get(TitleKey::new(title)).await
    }

    /// Returns the number of copies on the shelf.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, title: &str) -> Result<u32, CatalogError> {
        match self.action(title, StockAction::CheckStock).await? {
            StockActionResult::CheckStock(available) => Ok(available),
            _ => unreachable!("CheckStock action must return CheckStock result"),
        }
    }

    /// Takes one copy off the shelf and returns the movie it belongs to.
    #[instrument(skip(self))]
    pub async fn checkout(&self, title: &str) -> Result<Movie, CatalogError> {
        match self.action(title, StockAction::Checkout).await? {
            StockActionResult::Checkout(movie) => Ok(movie),
            _ => unreachable!("Checkout action must return Checkout result"),
        }
    }

    /// Puts one copy back and returns the new available count.
    #[instrument(skip(self))]
    pub async fn check_in(&self, title: &str) -> Result<u32, CatalogError> {
        match self.action(title, StockAction::CheckIn).await? {
            StockActionResult::CheckIn(available) => Ok(available),
            _ => unreachable!("CheckIn action must return CheckIn result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn restock(&self, title: &str, copies: u32) -> Result<u32, CatalogError> {
        match self.action(title, StockAction::Restock(copies)).await? {
            StockActionResult::Restock(available) => Ok(available),
            _ => unreachable!("Restock action must return Restock result"),
        }
    }

    async fn action(
        &self,
        title: &str,
        action: StockAction,
    ) -> Result<StockActionResult, CatalogError> {
        debug!(?action, "Sending action");
        self.inner
            .perform_action(TitleKey::new(title), action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<StockEntry> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<StockEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(title) => CatalogError::NotFound(title),
            other => other
                .downcast_entity::<CatalogError>()
                .unwrap_or_else(|e| CatalogError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{
        create_mock_client, expect_action, expect_create, expect_get, expect_list,
    };

    #[tokio::test]
    async fn test_check_stock_normalizes_title() {
        let (client, mut receiver) = create_mock_client::<StockEntry>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move { catalog.check_stock("  Spider MAN ").await });

        let (key, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(key, TitleKey::new("spider man"));
        assert!(matches!(action, StockAction::CheckStock));
        responder.send(Ok(StockActionResult::CheckStock(12))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 12);
    }

    #[tokio::test]
    async fn test_checkout_surfaces_typed_entity_error() {
        let (client, mut receiver) = create_mock_client::<StockEntry>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move { catalog.checkout("Heat").await });

        let (_, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert!(matches!(action, StockAction::Checkout));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                CatalogError::Unavailable {
                    title: "Heat".to_string(),
                },
            ))))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            CatalogError::Unavailable {
                title: "Heat".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_missing_title_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<StockEntry>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move { catalog.check_in("Ronin").await });

        let (key, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound(key.to_string())))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            CatalogError::NotFound("ronin".to_string())
        );
    }

    #[tokio::test]
    async fn test_add_existing_title_restocks() {
        let (client, mut receiver) = create_mock_client::<StockEntry>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move {
            catalog
                .add_movie(MovieCreate::new("Super Man").with_copies(3))
                .await
        });

        let (params, responder) = expect_create(&mut receiver).await.unwrap();
        assert_eq!(params.copies, 3);
        responder
            .send(Err(FrameworkError::AlreadyExists("super man".to_string())))
            .unwrap();

        let (key, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(key, TitleKey::new("super man"));
        assert!(matches!(action, StockAction::Restock(3)));
        responder.send(Ok(StockActionResult::Restock(8))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), TitleKey::new("super man"));
    }

    #[tokio::test]
    async fn test_find_by_title_sends_normalized_key() {
        let (client, mut receiver) = create_mock_client::<StockEntry>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move { catalog.find_by_title(" HEAT\t").await });

        let (key, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(key, TitleKey::new("heat"));
        responder
            .send(Ok(Some(StockEntry::new(Movie::new("Heat"), 2))))
            .unwrap();

        let entry = task.await.unwrap().unwrap().expect("entry should be found");
        assert_eq!(entry.to_string(), "Heat: 2");
    }

    #[tokio::test]
    async fn test_list_movies_keeps_actor_order() {
        let (client, mut receiver) = create_mock_client::<StockEntry>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move { catalog.list_movies().await });

        let responder = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        responder
            .send(Ok(vec![
                StockEntry::new(Movie::new("Spider Man"), 12),
                StockEntry::new(Movie::new("Super Man"), 5),
            ]))
            .unwrap();

        let titles: Vec<String> = task
            .await
            .unwrap()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(titles, vec!["Spider Man: 12", "Super Man: 5"]);
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<StockEntry>(1);
        drop(receiver);
        let catalog = CatalogClient::new(client);

        let err = catalog.list_movies().await.unwrap_err();
        assert!(matches!(err, CatalogError::ActorCommunicationError(_)));
    }
}
