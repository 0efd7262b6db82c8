//! # Data merger — local overlay on top of remote data
//!
//! For one [`Route`] the [`Merger`] reads the local collections from the
//! [`PersistentStore`], fetches the matching remote collection, and combines
//! them into a [`Dataset`] the renderer can draw without further I/O.
//!
//! ## Rules
//!
//! | View | Local | Remote | Search fields |
//! |------|-------|--------|---------------|
//! | Users | all users | `get_users()` | name, email, username |
//! | Users + id | `find_user` | `get_user(id)` | none |
//! | Tasks | tasks (of `userId` if set) | `get_tasks(userId)` | title |
//! | Posts | none | `get_posts(userId)` | title, body |
//! | Comments + post | comments of post | `get_comments(postId)` | name, email, body |
//! | Comments | all comments | `get_comments(None)` | name, email, body |
//!
//! Local records always come first and carry [`Origin::Local`]. A remote
//! record whose ID is already taken by a local record of the same kind is
//! dropped. In the all-comments mode the filtered, combined set is stably
//! sorted by `postId` and cut into one [`CommentGroup`] per post.
//!
//! ## Failure
//!
//! Nothing here fails. A remote error leaves the remote half empty and adds a
//! [`Warning::Network`]; an unreadable local collection is treated as empty
//! and adds a [`Warning::Storage`].

use std::collections::HashSet;

use api::{ApiError, RemoteSource};
use futures::join;
use store::{Comment, KeyValueStore, PersistentStore, Post, Record, StorageError, Task, User};

use crate::route::{Route, View};
use crate::search::{self, SearchQuery, Searchable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Local,
    Remote,
}

/// A record tagged with where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Sourced<T> {
    pub origin: Origin,
    pub record: T,
}

impl<T> Sourced<T> {
    pub fn local(record: T) -> Self {
        Self {
            origin: Origin::Local,
            record,
        }
    }

    pub fn remote(record: T) -> Self {
        Self {
            origin: Origin::Remote,
            record,
        }
    }

    pub fn is_local(&self) -> bool {
        self.origin == Origin::Local
    }
}

impl<T: Searchable> Searchable for Sourced<T> {
    fn search_fields(&self) -> Vec<&str> {
        self.record.search_fields()
    }
}

/// The user a task or post listing is scoped to.
#[derive(Clone, Debug, PartialEq)]
pub struct Owner {
    pub id: u64,
    pub name: String,
}

/// What the per-post comments view shows above the list.
#[derive(Clone, Debug, PartialEq)]
pub struct PostHeader {
    pub id: u64,
    pub user_id: Option<u64>,
    pub title: String,
    pub body: String,
    pub author: Option<String>,
}

impl PostHeader {
    fn fallback(id: u64) -> Self {
        Self {
            id,
            user_id: None,
            title: format!("Post #{id}"),
            body: String::new(),
            author: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommentGroup {
    pub post_id: u64,
    pub comments: Vec<Sourced<Comment>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Dataset {
    Users(Vec<Sourced<User>>),
    UserDetail(Option<Sourced<User>>),
    Tasks {
        owner: Option<Owner>,
        tasks: Vec<Sourced<Task>>,
    },
    Posts {
        owner: Option<Owner>,
        posts: Vec<Post>,
    },
    PostComments {
        post: PostHeader,
        comments: Vec<Sourced<Comment>>,
    },
    CommentGroups(Vec<CommentGroup>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Warning {
    Network(ApiError),
    Storage(String),
}

/// Result of one load: everything a render pass needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Loaded {
    pub route: Route,
    pub data: Dataset,
    pub warnings: Vec<Warning>,
}

impl Loaded {
    pub fn network_failed(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, Warning::Network(_)))
    }

    pub fn storage_problems(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().filter_map(|w| match w {
            Warning::Storage(message) => Some(message.as_str()),
            Warning::Network(_) => None,
        })
    }
}

/// Borrowing view over the two data sources for one load.
pub struct Merger<'a, R, K: KeyValueStore> {
    remote: &'a R,
    store: &'a PersistentStore<K>,
}

impl<'a, R: RemoteSource, K: KeyValueStore> Merger<'a, R, K> {
    pub fn new(remote: &'a R, store: &'a PersistentStore<K>) -> Self {
        Self { remote, store }
    }

    pub async fn load(&self, route: &Route, query: &SearchQuery) -> Loaded {
        let mut warnings = Vec::new();
        let data = match (route.view, route.user_id, route.post_id) {
            (View::Users, Some(user_id), _) => self.user_detail(user_id, &mut warnings).await,
            (View::Users, None, _) => self.users(query, &mut warnings).await,
            (View::Tasks, user_id, _) => self.tasks(user_id, query, &mut warnings).await,
            (View::Posts, user_id, _) => self.posts(user_id, query, &mut warnings).await,
            (View::Comments, _, Some(post_id)) => {
                self.post_comments(post_id, query, &mut warnings).await
            }
            (View::Comments, _, None) => self.all_comments(query, &mut warnings).await,
        };
        Loaded {
            route: *route,
            data,
            warnings,
        }
    }

    async fn users(&self, query: &SearchQuery, warnings: &mut Vec<Warning>) -> Dataset {
        let local = read_local(self.store.load_users(), warnings);
        let remote = fetched(self.remote.get_users().await, warnings);
        Dataset::Users(search::filter(local_first(local, remote), query))
    }

    async fn user_detail(&self, user_id: u64, warnings: &mut Vec<Warning>) -> Dataset {
        let local = read_local(self.store.load_users(), warnings);
        if let Some(user) = local.into_iter().find(|u| u.id == user_id) {
            return Dataset::UserDetail(Some(Sourced::local(user)));
        }
        match self.remote.get_user(user_id).await {
            Ok(user) => Dataset::UserDetail(Some(Sourced::remote(user))),
            Err(ApiError::Status { status: 404, .. }) => Dataset::UserDetail(None),
            Err(e) => {
                tracing::warn!("Fetching user {user_id}: {e}");
                warnings.push(Warning::Network(e));
                Dataset::UserDetail(None)
            }
        }
    }

    async fn tasks(
        &self,
        user_id: Option<u64>,
        query: &SearchQuery,
        warnings: &mut Vec<Warning>,
    ) -> Dataset {
        let local = read_local(self.store.load_tasks(), warnings);
        let local: Vec<Task> = match user_id {
            Some(id) => local.into_iter().filter(|t| t.user_id == id).collect(),
            None => local,
        };
        let (remote, owner) = join!(self.remote.get_tasks(user_id), self.owner(user_id));
        let remote = fetched(remote, warnings);
        Dataset::Tasks {
            owner,
            tasks: search::filter(local_first(local, remote), query),
        }
    }

    async fn posts(
        &self,
        user_id: Option<u64>,
        query: &SearchQuery,
        warnings: &mut Vec<Warning>,
    ) -> Dataset {
        let (posts, owner) = join!(self.remote.get_posts(user_id), self.owner(user_id));
        let posts = fetched(posts, warnings);
        Dataset::Posts {
            owner,
            posts: search::filter(posts, query),
        }
    }

    async fn post_comments(
        &self,
        post_id: u64,
        query: &SearchQuery,
        warnings: &mut Vec<Warning>,
    ) -> Dataset {
        let local: Vec<Comment> = read_local(self.store.load_comments(), warnings)
            .into_iter()
            .filter(|c| c.post_id == post_id)
            .collect();
        let (remote, post) = join!(
            self.remote.get_comments(Some(post_id)),
            self.remote.get_post(post_id)
        );
        let remote = fetched(remote, warnings);

        let header = match post {
            Ok(post) => {
                let author = self.owner(Some(post.user_id)).await.map(|o| o.name);
                PostHeader {
                    id: post.id,
                    user_id: Some(post.user_id),
                    title: post.title,
                    body: post.body,
                    author,
                }
            }
            Err(e) => {
                tracing::warn!("Fetching post {post_id}: {e}");
                if !warnings.contains(&Warning::Network(e.clone())) {
                    warnings.push(Warning::Network(e));
                }
                PostHeader::fallback(post_id)
            }
        };

        Dataset::PostComments {
            post: header,
            comments: search::filter(local_first(local, remote), query),
        }
    }

    async fn all_comments(&self, query: &SearchQuery, warnings: &mut Vec<Warning>) -> Dataset {
        let local = read_local(self.store.load_comments(), warnings);
        let remote = fetched(self.remote.get_comments(None).await, warnings);
        let merged = search::filter(local_first(local, remote), query);
        Dataset::CommentGroups(group_by_post(merged))
    }

    /// Display name for a listing's owner: local store, then remote, then a
    /// placeholder. Never raises a warning.
    async fn owner(&self, user_id: Option<u64>) -> Option<Owner> {
        let id = user_id?;
        if let Some(user) = self.store.find_user(id) {
            return Some(Owner { id, name: user.name });
        }
        let name = match self.remote.get_user(id).await {
            Ok(user) => user.name,
            Err(e) => {
                tracing::debug!("Owner {id} unresolved: {e}");
                format!("User {id}")
            }
        };
        Some(Owner { id, name })
    }
}

fn read_local<T>(result: Result<Vec<T>, StorageError>, warnings: &mut Vec<Warning>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!("Local collection unreadable: {e}");
        warnings.push(Warning::Storage(e.to_string()));
        Vec::new()
    })
}

fn fetched<T>(result: Result<Vec<T>, ApiError>, warnings: &mut Vec<Warning>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!("Remote fetch failed, showing local data only: {e}");
        warnings.push(Warning::Network(e));
        Vec::new()
    })
}

/// Local records first, then remote ones whose ID is not taken locally.
pub fn local_first<T: Record>(local: Vec<T>, remote: Vec<T>) -> Vec<Sourced<T>> {
    let taken: HashSet<u64> = local.iter().map(Record::id).collect();
    let local_count = local.len();
    let mut merged: Vec<Sourced<T>> = local.into_iter().map(Sourced::local).collect();
    for record in remote {
        if taken.contains(&record.id()) {
            tracing::warn!(
                "Dropping remote {} {}: id already used by a local record",
                T::KIND,
                record.id()
            );
            continue;
        }
        merged.push(Sourced::remote(record));
    }
    tracing::debug!(
        "Merged {local_count} local and {} remote {}s",
        merged.len() - local_count,
        T::KIND
    );
    merged
}

/// Stable sort by post, then one group per run of equal `postId`.
pub fn group_by_post(mut comments: Vec<Sourced<Comment>>) -> Vec<CommentGroup> {
    comments.sort_by_key(|c| c.record.post_id);
    let mut groups: Vec<CommentGroup> = Vec::new();
    for comment in comments {
        match groups.last_mut() {
            Some(group) if group.post_id == comment.record.post_id => group.comments.push(comment),
            _ => groups.push(CommentGroup {
                post_id: comment.record.post_id,
                comments: vec![comment],
            }),
        }
    }
    groups
}
