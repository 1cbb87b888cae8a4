use resource_actor::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

/// A locker keyed by its upper-cased label, so two creates can collide.
#[derive(Clone, Debug, PartialEq)]
struct Locker {
    label: String,
    items: u32,
}

#[derive(Debug)]
struct LockerCreate {
    label: String,
    items: u32,
}

#[derive(Debug)]
enum LockerAction {
    Take,
    Put,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum LockerError {
    #[error("Locker {0} is empty")]
    Empty(String),
    #[error("Locker {0} still holds items")]
    NotEmpty(String),
    #[error("Label must not be blank")]
    BlankLabel,
}

#[async_trait]
impl ActorEntity for Locker {
    type Id = String;
    type Create = LockerCreate;
    type Action = LockerAction;
    type ActionResult = u32;
    type Context = ();
    type Error = LockerError;

    fn id_for(_seq: u32, params: &LockerCreate) -> String {
        params.label.trim().to_uppercase()
    }

    fn from_create_params(id: String, params: LockerCreate) -> Result<Self, Self::Error> {
        if id.is_empty() {
            return Err(LockerError::BlankLabel);
        }
        Ok(Self {
            label: id,
            items: params.items,
        })
    }

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if self.items > 0 {
            return Err(LockerError::NotEmpty(self.label.clone()));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: LockerAction,
        _ctx: &Self::Context,
    ) -> Result<u32, Self::Error> {
        match action {
            LockerAction::Take => {
                if self.items == 0 {
                    return Err(LockerError::Empty(self.label.clone()));
                }
                self.items -= 1;
            }
            LockerAction::Put => self.items += 1,
        }
        Ok(self.items)
    }
}

fn locker(label: &str, items: u32) -> LockerCreate {
    LockerCreate {
        label: label.to_string(),
        items,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create derives the key from the payload
    let id = client.create(locker(" b7 ", 1)).await.unwrap();
    assert_eq!(id, "B7");

    // 2. Actions mutate the stored entity
    assert_eq!(client.perform_action(id.clone(), LockerAction::Take).await.unwrap(), 0);
    let stored = client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(stored.items, 0);

    // 3. Entity errors come back typed
    let err = client
        .perform_action(id.clone(), LockerAction::Take)
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_entity::<LockerError>().unwrap(),
        LockerError::Empty("B7".to_string())
    );

    // 4. Delete runs the hook, then removes
    client.delete(id.clone()).await.unwrap();
    assert!(client.get(id.clone()).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["c1", "a1", "b1"] {
        client.create(locker(label, 0)).await.unwrap();
    }
    client.delete("A1".to_string()).await.unwrap();
    client.create(locker("a2", 0)).await.unwrap();

    let labels: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.label)
        .collect();
    assert_eq!(labels, vec!["C1", "B1", "A2"]);
}

#[tokio::test]
async fn test_duplicate_key_is_rejected() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    tokio::spawn(actor.run(()));

    client.create(locker("d4", 2)).await.unwrap();
    let err = client.create(locker("D4 ", 9)).await.unwrap_err();
    assert!(matches!(err, FrameworkError::AlreadyExists(ref key) if key == "D4"));

    // The stored entity is untouched
    let stored = client.get("D4".to_string()).await.unwrap().unwrap();
    assert_eq!(stored.items, 2);
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_hooks_leave_store_unchanged() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(locker("   ", 0)).await.unwrap_err();
    assert_eq!(
        err.downcast_entity::<LockerError>().unwrap(),
        LockerError::BlankLabel
    );

    let id = client.create(locker("e5", 3)).await.unwrap();
    let err = client.delete(id.clone()).await.unwrap_err();
    assert_eq!(
        err.downcast_entity::<LockerError>().unwrap(),
        LockerError::NotEmpty("E5".to_string())
    );
    assert!(client.get(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_missing_key_is_not_found() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    tokio::spawn(actor.run(()));

    let err = client
        .perform_action("Z9".to_string(), LockerAction::Put)
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(ref key) if key == "Z9"));
    assert!(matches!(
        err.downcast_entity::<LockerError>(),
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    drop(actor);

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}

#[tokio::test]
async fn test_zero_buffer_size_still_serves_requests() {
    let (actor, client) = ResourceActor::<Locker>::new(0);
    tokio::spawn(actor.run(()));

    let id = client.create(locker("a1", 1)).await.unwrap();
    assert_eq!(client.list().await.unwrap().len(), 1);
    assert!(client.get(id).await.unwrap().is_some());
}
