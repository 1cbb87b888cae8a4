//! ActorEntity trait implementation for the User domain type.

use super::error::UserError;
use crate::model::{User, UserCreate, UserId};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn id_for(seq: u32, _params: &UserCreate) -> UserId {
        UserId(seq)
    }

    /// Creates a new User from creation parameters.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.age))
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
