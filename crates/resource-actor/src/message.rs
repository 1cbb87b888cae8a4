//! # Generic Messages
//!
//! The request envelope sent from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants follow the resource lifecycle: `Create` starts it, `Get` and `List` read it,
/// `Delete` ends it, and `Action` carries the entity's own operations (stock checkout,
/// check-in, …) that do not fit the lifecycle.
///
/// Every payload is typed through the associated types of [`ActorEntity`], so a rental
/// payload can never reach the catalog actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Every stored entity, oldest first.
    List { respond_to: Response<Vec<T>> },
    Delete { id: T::Id, respond_to: Response<()> },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
