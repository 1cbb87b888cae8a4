//! # Store Configuration
//!
//! Settings for one [`RentalSystem`](crate::lifecycle::RentalSystem). Everything has a
//! default, so a partial document (or none at all) is enough:
//!
//! ```json
//! { "store_name": "Corner Video", "max_age_attempts": 3 }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Shown in the driver's banner.
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Mailbox size of every actor.
    /// Default: 32
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Invalid age answers tolerated before the prompt gives up.
    /// `None` re-prompts forever.
    #[serde(default)]
    pub max_age_attempts: Option<u32>,
}

fn default_store_name() -> String {
    "New Store in town".to_string()
}

fn default_channel_capacity() -> usize {
    32
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: default_store_name(),
            channel_capacity: default_channel_capacity(),
            max_age_attempts: None,
        }
    }
}
