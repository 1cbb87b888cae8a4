//! # Movie Store Demo
//!
//! Registers the customer from stdin, then walks the store through a fixed script:
//! stock two titles, rent both, show the rentals and return both.
//!
//! Diagnostics go to stderr; set `RUST_LOG=info` to see actor activity.

use movie_store::config::StoreConfig;
use movie_store::lifecycle::RentalSystem;
use movie_store::model::{MovieCreate, StockEntry};
use movie_store::prompt::UserPrompt;
use resource_actor::tracing::setup_tracing;
use tokio::io::BufReader;
use tracing::{info, Instrument};

fn print_listing(entries: &[StockEntry]) {
    for entry in entries {
        println!("  {entry}");
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StoreConfig::default();
    let system = RentalSystem::with_config(&config);

    let mut prompt = UserPrompt::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .with_max_age_attempts(config.max_age_attempts);
    let user_info = prompt.collect_user_info().await.map_err(|e| e.to_string())?;

    let user_id = async {
        info!("Registering user");
        system
            .user_client
            .create_user(user_info)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(tracing::info_span!("user_registration"))
    .await?;

    println!("\nWelcome to {}", config.store_name);

    println!("\n**Adding new movies to the store\n");
    for (title, copies) in [("Spider Man", 12), ("Super Man", 5)] {
        system
            .catalog_client
            .add_movie(MovieCreate::new(title).with_copies(copies))
            .await
            .map_err(|e| e.to_string())?;
    }

    let catalog = &system.catalog_client;
    let rentals = &system.rental_client;

    println!("Show available movies\n");
    print_listing(&catalog.list_movies().await.map_err(|e| e.to_string())?);

    println!("\n**Renting movies from the store\n");
    for title in ["Spider Man", "Super Man"] {
        match rentals.rent(user_id, title).await {
            Ok(movie) => println!("Successfully rented {movie}"),
            Err(e) => println!("{e}"),
        }
    }

    println!("\nGetting all movies");
    print_listing(&catalog.list_movies().await.map_err(|e| e.to_string())?);

    println!("Show rented movies\n");
    let records = rentals.rented_movies().await.map_err(|e| e.to_string())?;
    for (name, titles) in &records {
        let titles: Vec<&str> = titles.iter().map(|t| t.as_str()).collect();
        println!("  {name}: {}", titles.join(", "));
    }

    println!("\n*returning movies");
    let mut returned = Vec::new();
    for title in ["Spider Man", "Super Man"] {
        returned.push(rentals.return_movie(user_id, title).await);
    }
    println!("Getting all movies");
    for result in returned {
        match result {
            Ok(listing) => print_listing(&listing),
            Err(e) => println!("{e}"),
        }
        println!();
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
