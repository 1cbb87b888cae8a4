use movie_store::catalog_actor::{CatalogError, StockActionResult};
use movie_store::clients::{CatalogClient, UserClient};
use movie_store::model::{Movie, Rental, RentalId, StockEntry, TitleKey, User, UserId};
use movie_store::rental_actor::{self, RentalError};
use resource_actor::mock::MockClient;
use resource_actor::{ActorClient, FrameworkError};

/// Real Rental actor with mocked User and catalog dependencies.
///
/// Exercises the `on_create` / `on_delete` hooks in isolation.
#[tokio::test]
async fn test_rental_actor_with_mocked_dependencies() {
    let mut user_mock = MockClient::<User>::new();
    let mut catalog_mock = MockClient::<StockEntry>::new();

    // on_create: user lookup, then checkout
    user_mock
        .expect_get(UserId(1))
        .return_ok(Some(User::new(UserId(1), "Alice", 31)));
    catalog_mock
        .expect_action(TitleKey::new("spider man"))
        .return_ok(StockActionResult::Checkout(Movie::new("Spider Man")));
    // return_movie: lookup, on_delete check-in, listing
    catalog_mock
        .expect_get(TitleKey::new("spider man"))
        .return_ok(Some(StockEntry::new(Movie::new("Spider Man"), 3)));
    catalog_mock
        .expect_action(TitleKey::new("spider man"))
        .return_ok(StockActionResult::CheckIn(3));
    catalog_mock
        .expect_list()
        .return_ok(vec![StockEntry::new(Movie::new("Spider Man"), 3)]);

    let user_client = UserClient::new(user_mock.client());
    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (rental_actor, rental_client) = rental_actor::new(8, catalog_client.clone());
    let actor_handle = tokio::spawn(rental_actor.run((user_client, catalog_client)));

    let movie = rental_client
        .rent(UserId(1), "SPIDER MAN")
        .await
        .expect("Rental failed");
    assert_eq!(movie.title, "Spider Man");

    let rental = rental_client
        .get(RentalId(1))
        .await
        .unwrap()
        .expect("Rental not stored");
    assert_eq!(rental.user_name, "Alice");
    assert_eq!(rental.key, TitleKey::new("spider man"));

    let listing = rental_client
        .return_movie(UserId(1), "spider man")
        .await
        .expect("Return failed");
    assert_eq!(listing[0].to_string(), "Spider Man: 3");
    assert!(rental_client.list().await.unwrap().is_empty());

    user_mock.verify();
    catalog_mock.verify();

    drop(rental_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_sold_out_title_is_not_stored() {
    let mut user_mock = MockClient::<User>::new();
    let mut catalog_mock = MockClient::<StockEntry>::new();

    user_mock
        .expect_get(UserId(1))
        .return_ok(Some(User::new(UserId(1), "Alice", 31)));
    catalog_mock
        .expect_action(TitleKey::new("heat"))
        .return_err(FrameworkError::EntityError(Box::new(
            CatalogError::Unavailable {
                title: "Heat".to_string(),
            },
        )));

    let (rental_actor, rental_client) =
        rental_actor::new(8, CatalogClient::new(catalog_mock.client()));
    let actor_handle = tokio::spawn(rental_actor.run((
        UserClient::new(user_mock.client()),
        CatalogClient::new(catalog_mock.client()),
    )));

    let err = rental_client.rent(UserId(1), " heat").await.unwrap_err();
    assert_eq!(
        err,
        RentalError::NotFoundOrUnavailable {
            title: "heat".to_string()
        }
    );
    assert!(rental_client.list().await.unwrap().is_empty());

    user_mock.verify();
    catalog_mock.verify();

    drop(rental_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_user_skips_checkout() {
    let mut user_mock = MockClient::<User>::new();
    let catalog_mock = MockClient::<StockEntry>::new();

    user_mock.expect_get(UserId(7)).return_ok(None);

    let (rental_actor, rental_client) =
        rental_actor::new(8, CatalogClient::new(catalog_mock.client()));
    let actor_handle = tokio::spawn(rental_actor.run((
        UserClient::new(user_mock.client()),
        CatalogClient::new(catalog_mock.client()),
    )));

    let err = rental_client.rent(UserId(7), "Heat").await.unwrap_err();
    assert_eq!(err, RentalError::UnknownUser(UserId(7)));

    user_mock.verify();
    catalog_mock.verify();

    drop(rental_client);
    actor_handle.await.unwrap();
}

#[test]
fn test_rental_starts_with_requested_spelling() {
    let rental = Rental::new(RentalId(1), UserId(1), " Heat ");
    assert_eq!(rental.movie.title, "Heat");
    assert!(rental.user_name.is_empty());
}
