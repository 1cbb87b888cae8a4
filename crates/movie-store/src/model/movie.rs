/// A stocked title and its copy counts.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for StockEntry`](#impl-ActorEntity-for-StockEntry) for details on:
/// - Creation parameters ([`MovieCreate`])
/// - Custom actions ([`StockAction`](crate::catalog_actor::StockAction))
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lookup key for a title: trimmed and lower-cased.
///
/// Two titles name the same catalog entry exactly when their keys are equal, so
/// `"Spider Man"`, `" spider man "` and `"SPIDER MAN"` all resolve to one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TitleKey(String);

impl TitleKey {
    pub fn new(title: &str) -> Self {
        Self(title.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TitleKey {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl Display for TitleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A movie title, case-preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
}

impl Movie {
    /// Creates a Movie from a title, trimming surrounding whitespace.
    pub fn new(title: impl AsRef<str>) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
        }
    }

    pub fn key(&self) -> TitleKey {
        TitleKey::new(&self.title)
    }
}

impl Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub movie: Movie,
    /// Copies on the shelf right now.
    pub available_copies: u32,
    /// Copies the store owns; `available_copies` never exceeds it.
    pub total_copies: u32,
}

impl StockEntry {
    pub fn new(movie: Movie, copies: u32) -> Self {
        Self {
            movie,
            available_copies: copies,
            total_copies: copies,
        }
    }

    pub fn key(&self) -> TitleKey {
        self.movie.key()
    }

    pub fn title(&self) -> &str {
        &self.movie.title
    }

    /// Copies currently rented out.
    pub fn rented_copies(&self) -> u32 {
        self.total_copies - self.available_copies
    }
}

impl Display for StockEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.movie.title, self.available_copies)
    }
}

/// Payload for adding a title to the catalog.
#[derive(Debug, Clone)]
pub struct MovieCreate {
    pub title: String,
    pub copies: u32,
}

impl MovieCreate {
    /// One copy of `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            copies: 1,
        }
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }
}
