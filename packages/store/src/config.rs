//! # Client configuration — `client.toml`
//!
//! Defines the TOML file that tunes the client: where the remote service lives,
//! how local collections are keyed, and the presentation limits used by the
//! view renderer.
//!
//! ## Structure
//!
//! ```toml
//! [remote]
//! base_url = "https://jsonplaceholder.typicode.com"
//!
//! [storage]
//! key_prefix = ""            # prepended to customUsers / customTodos / customComments
//! seed_sample_data = false   # write sample records on first run
//!
//! [view]
//! comments_per_group = 3     # cap per cluster in the all-comments view
//! title_limit = 50
//! body_limit = 150
//! grouped_body_limit = 100
//!
//! [notifications]
//! duration_ms = 3000
//! ```
//!
//! Every section and key is `#[serde(default)]`, so a missing or partial file
//! is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `client.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub key_prefix: String,
    #[serde(default)]
    pub seed_sample_data: bool,
}

/// Presentation limits, counted in grapheme clusters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_comments_per_group")]
    pub comments_per_group: usize,
    #[serde(default = "default_title_limit")]
    pub title_limit: usize,
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
    #[serde(default = "default_grouped_body_limit")]
    pub grouped_body_limit: usize,
}

fn default_comments_per_group() -> usize {
    3
}

fn default_title_limit() -> usize {
    50
}

fn default_body_limit() -> usize {
    150
}

fn default_grouped_body_limit() -> usize {
    100
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            comments_per_group: default_comments_per_group(),
            title_limit: default_title_limit(),
            body_limit: default_body_limit(),
            grouped_body_limit: default_grouped_body_limit(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
}

fn default_duration_ms() -> u32 {
    3000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point at another remote service.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.remote.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Builder method to toggle first-run sample data.
    pub fn with_sample_data(mut self, seed: bool) -> Self {
        self.storage.seed_sample_data = seed;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "client.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
