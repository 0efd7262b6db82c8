//! The remote read endpoint as seen by the client.
//!
//! [`RemoteSource`] is an async, read-only view of the four resource kinds.
//! Optional foreign keys narrow a listing (`/todos?userId=5`). Futures are not
//! required to be `Send`; the client runs on a single thread.

use std::future::Future;

use store::{Comment, Post, Task, User};

use crate::error::ApiError;

pub trait RemoteSource {
    fn get_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>>;
    fn get_user(&self, id: u64) -> impl Future<Output = Result<User, ApiError>>;
    fn get_tasks(&self, user_id: Option<u64>) -> impl Future<Output = Result<Vec<Task>, ApiError>>;
    fn get_posts(&self, user_id: Option<u64>) -> impl Future<Output = Result<Vec<Post>, ApiError>>;
    fn get_post(&self, id: u64) -> impl Future<Output = Result<Post, ApiError>>;
    fn get_comments(
        &self,
        post_id: Option<u64>,
    ) -> impl Future<Output = Result<Vec<Comment>, ApiError>>;
}
