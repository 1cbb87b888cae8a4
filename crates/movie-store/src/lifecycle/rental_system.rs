use crate::clients::{CatalogClient, RentalClient, UserClient};
use crate::config::StoreConfig;
use crate::{catalog_actor, rental_actor, user_actor};
use tracing::{error, info};

/// The running store: one actor per resource plus the clients that talk to them.
///
/// # Example
///
/// ```rust
/// use movie_store::lifecycle::RentalSystem;
/// use movie_store::model::{MovieCreate, UserCreate};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let system = RentalSystem::new();
///
/// let ann = system
///     .user_client
///     .create_user(UserCreate { name: "Ann".into(), age: 40 })
///     .await?;
/// system.catalog_client.add_movie(MovieCreate::new("Heat")).await?;
/// system.rental_client.rent(ann, "Heat").await?;
/// system.rental_client.return_movie(ann, "Heat").await?;
///
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct RentalSystem {
    pub catalog_client: CatalogClient,
    pub user_client: UserClient,
    pub rental_client: RentalClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RentalSystem {
    /// Starts the store with [`StoreConfig::default`].
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    pub fn with_config(config: &StoreConfig) -> Self {
        let capacity = config.channel_capacity;

        let (user_actor, user_client) = user_actor::new(capacity);
        let (catalog_actor, catalog_client) = catalog_actor::new(capacity);
        let (rental_actor, rental_client) = rental_actor::new(capacity, catalog_client.clone());

        let user_handle = tokio::spawn(user_actor.run(()));
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let rental_handle =
            tokio::spawn(rental_actor.run((user_client.clone(), catalog_client.clone())));

        info!(store = %config.store_name, capacity, "Rental system started");

        Self {
            catalog_client,
            user_client,
            rental_client,
            handles: vec![rental_handle, user_handle, catalog_handle],
        }
    }

    /// Drops every client and waits for each actor to finish.
    ///
    /// # Errors
    /// Returns the first actor task that panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.rental_client);
        drop(self.user_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RentalSystem {
    fn default() -> Self {
        Self::new()
    }
}
