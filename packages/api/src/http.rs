//! # HTTP remote — JSONPlaceholder-style REST client
//!
//! [`HttpRemote`] implements [`RemoteSource`] over `reqwest`, which uses the
//! browser `fetch` API on wasm32 and a native HTTP stack elsewhere.
//!
//! ## Endpoints
//!
//! | Method | Path |
//! |--------|------|
//! | `get_users` | `/users` |
//! | `get_user` | `/users/{id}` |
//! | `get_tasks` | `/todos` or `/todos?userId={id}` |
//! | `get_posts` | `/posts` or `/posts?userId={id}` |
//! | `get_post` | `/posts/{id}` |
//! | `get_comments` | `/comments` or `/comments?postId={id}` |
//!
//! Non-2xx responses become [`ApiError::Status`], transport failures
//! [`ApiError::Transport`], and JSON that does not match the model
//! [`ApiError::Decode`].

use serde::de::DeserializeOwned;
use store::{Comment, Post, Task, User};

use crate::error::ApiError;
use crate::remote::RemoteSource;

/// REST client for the remote read-only service.
#[derive(Clone, Debug)]
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint, with an optional `key=value` filter.
    pub fn endpoint(&self, path: &str, filter: Option<(&str, u64)>) -> String {
        match filter {
            Some((key, value)) => format!("{}{path}?{key}={value}", self.base_url),
            None => format!("{}{path}", self.base_url),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode {
            url,
            reason: e.to_string(),
        })
    }
}

impl RemoteSource for HttpRemote {
    async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch(self.endpoint("/users", None)).await
    }

    async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        self.fetch(self.endpoint(&format!("/users/{id}"), None)).await
    }

    async fn get_tasks(&self, user_id: Option<u64>) -> Result<Vec<Task>, ApiError> {
        self.fetch(self.endpoint("/todos", user_id.map(|id| ("userId", id))))
            .await
    }

    async fn get_posts(&self, user_id: Option<u64>) -> Result<Vec<Post>, ApiError> {
        self.fetch(self.endpoint("/posts", user_id.map(|id| ("userId", id))))
            .await
    }

    async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        self.fetch(self.endpoint(&format!("/posts/{id}"), None)).await
    }

    async fn get_comments(&self, post_id: Option<u64>) -> Result<Vec<Comment>, ApiError> {
        self.fetch(self.endpoint("/comments", post_id.map(|id| ("postId", id))))
            .await
    }
}
