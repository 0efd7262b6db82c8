//! # API crate — the remote read-only data source
//!
//! Everything the client fetches comes through the [`RemoteSource`] trait.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`remote`] | The async [`RemoteSource`] trait: users, tasks (todos), posts and comments, optionally filtered by a foreign key |
//! | [`http`] | [`HttpRemote`], the `reqwest` implementation against a JSONPlaceholder-style REST service |
//! | [`fixture`] | [`StaticRemote`], an in-memory implementation for tests and offline demos |
//! | [`error`] | [`ApiError`], the NetworkError taxonomy |

pub mod error;
pub mod fixture;
pub mod http;
pub mod remote;

pub use error::ApiError;
pub use fixture::StaticRemote;
pub use http::HttpRemote;
pub use remote::RemoteSource;

pub use store::{Comment, Post, Task, User};
