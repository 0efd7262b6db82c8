//! In-memory [`RemoteSource`] for tests and offline demos.
//!
//! [`StaticRemote`] serves fixed collections with the same filtering rules as
//! the HTTP service. Flip it offline with [`set_offline`](StaticRemote::set_offline)
//! to exercise the degraded paths of the data merger.

use std::cell::Cell;

use store::{Comment, Post, Task, User};

use crate::error::ApiError;
use crate::remote::RemoteSource;

#[derive(Clone, Debug, Default)]
pub struct StaticRemote {
    users: Vec<User>,
    tasks: Vec<Task>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    offline: Cell<bool>,
    requests: Cell<usize>,
}

impl StaticRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    /// Make every subsequent request fail with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Number of requests served or refused so far.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    fn check(&self, path: &str) -> Result<(), ApiError> {
        self.requests.set(self.requests.get() + 1);
        if self.offline.get() {
            return Err(ApiError::Transport {
                url: format!("static:{path}"),
                reason: "offline".to_string(),
            });
        }
        Ok(())
    }

    fn not_found(path: String) -> ApiError {
        ApiError::Status {
            status: 404,
            url: format!("static:{path}"),
        }
    }
}

impl RemoteSource for StaticRemote {
    async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.check("/users")?;
        Ok(self.users.clone())
    }

    async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let path = format!("/users/{id}");
        self.check(&path)?;
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    async fn get_tasks(&self, user_id: Option<u64>) -> Result<Vec<Task>, ApiError> {
        self.check("/todos")?;
        Ok(self
            .tasks
            .iter()
            .filter(|t| user_id.map_or(true, |id| t.user_id == id))
            .cloned()
            .collect())
    }

    async fn get_posts(&self, user_id: Option<u64>) -> Result<Vec<Post>, ApiError> {
        self.check("/posts")?;
        Ok(self
            .posts
            .iter()
            .filter(|p| user_id.map_or(true, |id| p.user_id == id))
            .cloned()
            .collect())
    }

    async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        let path = format!("/posts/{id}");
        self.check(&path)?;
        self.posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    async fn get_comments(&self, post_id: Option<u64>) -> Result<Vec<Comment>, ApiError> {
        self.check("/comments")?;
        Ok(self
            .comments
            .iter()
            .filter(|c| post_id.map_or(true, |id| c.post_id == id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote() -> StaticRemote {
        StaticRemote::new()
            .with_users(vec![User {
                id: 1,
                name: "Leanne".into(),
                email: "l@x.io".into(),
                ..Default::default()
            }])
            .with_tasks(vec![
                Task { id: 1, user_id: 1, title: "a".into(), completed: false },
                Task { id: 2, user_id: 2, title: "b".into(), completed: true },
            ])
    }

    #[tokio::test]
    async fn test_filters_by_foreign_key() {
        let remote = remote();
        assert_eq!(remote.get_tasks(None).await.unwrap().len(), 2);
        let only = remote.get_tasks(Some(2)).await.unwrap();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].id, 2);
    }

    #[tokio::test]
    async fn test_missing_user_is_404() {
        let err = remote().get_user(42).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_offline_refuses_requests() {
        let remote = remote();
        remote.set_offline(true);
        assert!(remote.get_users().await.is_err());
        remote.set_offline(false);
        assert_eq!(remote.get_users().await.unwrap().len(), 1);
        assert_eq!(remote.requests(), 2);
    }
}
