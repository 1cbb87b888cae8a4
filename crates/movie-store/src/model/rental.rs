/// One checked-out copy held by one user.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for Rental`](#impl-ActorEntity-for-Rental) for details on
/// creation parameters ([`RentalCreate`]). Creating a rental checks a copy out of the
/// catalog; deleting it checks the copy back in.
use crate::model::{Movie, TitleKey, UserId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

/// Type-safe identifier for Rentals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RentalId(pub u32);

impl From<u32> for RentalId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RentalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rental_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub user_id: UserId,
    /// Filled in from the user actor when the rental is created.
    pub user_name: String,
    pub key: TitleKey,
    /// Canonical catalog title, filled in on checkout.
    pub movie: Movie,
}

impl Rental {
    /// Creates a pending Rental.
    ///
    /// # Notes
    /// `user_name` starts empty and `movie` holds the requested spelling until
    /// `on_create` resolves both against the user and catalog actors.
    pub fn new(id: RentalId, user_id: UserId, title: &str) -> Self {
        Self {
            id,
            user_id,
            user_name: String::new(),
            key: TitleKey::new(title),
            movie: Movie::new(title),
        }
    }

    pub fn is_held_by(&self, user_id: UserId, key: &TitleKey) -> bool {
        self.user_id == user_id && &self.key == key
    }
}

/// Payload for renting a title.
#[derive(Debug, Clone)]
pub struct RentalCreate {
    pub user_id: UserId,
    pub title: String,
}

/// User name to the lower-cased titles that user currently holds.
pub type RentalRecords = BTreeMap<String, BTreeSet<TitleKey>>;

/// Folds live rentals into [`RentalRecords`]. Users holding nothing are absent.
pub fn rental_records<'a>(rentals: impl IntoIterator<Item = &'a Rental>) -> RentalRecords {
    let mut records = RentalRecords::new();
    for rental in rentals {
        records
            .entry(rental.user_name.clone())
            .or_default()
            .insert(rental.key.clone());
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(id: u32, user: u32, name: &str, title: &str) -> Rental {
        let mut rental = Rental::new(RentalId(id), UserId(user), title);
        rental.user_name = name.to_string();
        rental
    }

    #[test]
    fn test_records_group_titles_by_user() {
        let rentals = vec![
            held(1, 1, "alice", "Spider Man"),
            held(2, 1, "alice", "Super Man"),
            held(3, 1, "alice", "SPIDER MAN"),
            held(4, 2, "bob", "Super Man"),
        ];

        let records = rental_records(&rentals);

        assert_eq!(records.len(), 2);
        let alice: Vec<&str> = records["alice"].iter().map(TitleKey::as_str).collect();
        assert_eq!(alice, vec!["spider man", "super man"]);
        assert!(records["bob"].contains(&TitleKey::new("super man")));
    }

    #[test]
    fn test_records_are_empty_without_rentals() {
        assert!(rental_records(&Vec::<Rental>::new()).is_empty());
    }

    #[test]
    fn test_is_held_by_matches_user_and_key() {
        let rental = held(1, 1, "alice", "Heat");
        assert!(rental.is_held_by(UserId(1), &TitleKey::new(" HEAT")));
        assert!(!rental.is_held_by(UserId(2), &TitleKey::new("heat")));
        assert!(!rental.is_held_by(UserId(1), &TitleKey::new("ronin")));
    }
}
