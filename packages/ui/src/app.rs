//! # App — the controller behind every navigation
//!
//! [`App`] is built once with its collaborators injected: a [`RemoteSource`],
//! a [`PersistentStore`] and a [`Shell`]. There is no global instance.
//!
//! ## Route changes
//!
//! [`App::handle_route_change`] is the only path from a location to a
//! rendered view. The shell calls it on every location change (address bar,
//! back/forward, `set_location`), and in-page links reach it through
//! [`Action::Navigate`] → [`App::navigate`] → `set_location`.
//!
//! Each call takes a fresh generation token before loading. When the load
//! finishes the token is compared with the latest one; a stale result is
//! dropped instead of overwriting a newer view.
//!
//! ## Mutations
//!
//! [`App::dispatch`] runs the create and delete flows. Deletes wait for an
//! asynchronous confirmation; creates re-prompt until the form validates or is
//! dismissed. Both re-run the current route afterwards rather than patching
//! the page.

use std::cell::{Cell, Ref, RefCell};

use api::RemoteSource;
use store::{ClientConfig, KeyValueStore, PersistentStore, StorageError};

use crate::binder::{self, Action};
use crate::breadcrumbs;
use crate::forms::{CommentDraft, FormFields, TaskDraft, UserDraft, ValidationError};
use crate::merge::Merger;
use crate::notify::{ActivityLog, Notice, NoticeLevel};
use crate::render;
use crate::route::{self, Route, DEFAULT_ROUTE};
use crate::search::SearchQuery;
use crate::shell::Shell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered(Route),
    /// A newer navigation started while this one was loading.
    Stale,
}

pub struct App<R, K: KeyValueStore, S> {
    remote: R,
    store: PersistentStore<K>,
    shell: S,
    config: ClientConfig,
    generation: Cell<u64>,
    log: RefCell<ActivityLog>,
}

impl<R: RemoteSource, K: KeyValueStore, S: Shell> App<R, K, S> {
    pub fn new(remote: R, store: PersistentStore<K>, shell: S, config: ClientConfig) -> Self {
        Self {
            remote,
            store,
            shell,
            config,
            generation: Cell::new(0),
            log: RefCell::new(ActivityLog::default()),
        }
    }

    pub fn store(&self) -> &PersistentStore<K> {
        &self.store
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn activity(&self) -> Ref<'_, ActivityLog> {
        self.log.borrow()
    }

    pub fn current_route(&self) -> Route {
        route::parse(&self.shell.location())
    }

    /// Seed sample data if configured, then render the initial location.
    pub async fn start(&self) -> RenderOutcome {
        if self.config.storage.seed_sample_data {
            match self.store.seed_sample_data() {
                Ok(true) => self.notify(NoticeLevel::Info, "Sample data added"),
                Ok(false) => {}
                Err(e) => self.notify(
                    NoticeLevel::Warning,
                    format!("Could not write sample data: {e}"),
                ),
            }
        }
        let location = self.shell.location();
        if location.trim_start_matches('#').trim().is_empty() {
            self.handle_route_change(DEFAULT_ROUTE).await
        } else {
            self.handle_route_change(&location).await
        }
    }

    /// Parse `location`, load its data and render it.
    pub async fn handle_route_change(&self, location: &str) -> RenderOutcome {
        let token = self.generation.get() + 1;
        self.generation.set(token);

        let route = route::parse(location);
        tracing::debug!("Route change #{token}: {location:?} -> {route:?}");

        self.shell.set_active_view(route.view);
        let trail = breadcrumbs::render(&breadcrumbs::build_for(&route));
        if let Some(root) = self.shell.mount_breadcrumbs(&trail) {
            binder::bind(&root, &route);
        }
        let _ = self.shell.mount_content(&render::loading());

        let query = SearchQuery::new(&self.shell.search_query());
        let loaded = Merger::new(&self.remote, &self.store)
            .load(&route, &query)
            .await;

        if self.generation.get() != token {
            tracing::debug!("Discarding stale render #{token} for {location:?}");
            return RenderOutcome::Stale;
        }

        let html = render::render(&loaded, &self.config.view);
        match self.shell.mount_content(&html) {
            Some(root) => {
                binder::bind(&root, &route);
            }
            None => tracing::warn!("No content mount point"),
        }
        for problem in loaded.storage_problems() {
            self.notify(
                NoticeLevel::Warning,
                format!("Local data could not be read: {problem}"),
            );
        }
        RenderOutcome::Rendered(route)
    }

    /// Re-run the route currently in the location bar.
    pub async fn refresh(&self) -> RenderOutcome {
        let location = self.shell.location();
        self.handle_route_change(&location).await
    }

    /// Go to `hash`. A new location is handed to the shell, which reports it
    /// back through [`handle_route_change`](Self::handle_route_change); the
    /// current location is re-run directly since the shell won't see a change.
    pub async fn navigate(&self, hash: &str) {
        if hash == self.shell.location() {
            self.refresh().await;
        } else {
            self.shell.set_location(hash);
        }
    }

    pub async fn dispatch(&self, action: Action) {
        tracing::debug!("Dispatch {action:?}");
        match action {
            Action::Navigate(hash) => {
                self.shell.close_modal();
                self.navigate(&hash).await;
            }
            Action::CreateUser => self.create_user().await,
            Action::CreateTask { user_id } => self.create_task(user_id).await,
            Action::CreateComment { post_id } => self.create_comment(post_id).await,
            Action::DeleteUser(id) => {
                self.delete(
                    "User",
                    "Delete this user and all of their tasks?",
                    |store| store.delete_user(id),
                )
                .await
            }
            Action::DeleteTask(id) => {
                self.delete("Task", "Delete this task?", |store| store.delete_task(id))
                    .await
            }
            Action::DeleteComment(id) => {
                self.delete("Comment", "Delete this comment?", |store| {
                    store.delete_comment(id)
                })
                .await
            }
            Action::ShowPost(id) => self.show_post(id).await,
        }
    }

    async fn delete(
        &self,
        what: &str,
        question: &str,
        op: impl FnOnce(&PersistentStore<K>) -> Result<(), StorageError>,
    ) {
        if !self.shell.confirm(question).await {
            tracing::debug!("{what} deletion cancelled");
            return;
        }
        match op(&self.store) {
            Ok(()) => {
                self.notify(NoticeLevel::Success, format!("{what} deleted"));
                self.refresh().await;
            }
            Err(e) => {
                tracing::error!("Deleting {what}: {e}");
                self.notify(NoticeLevel::Error, format!("Could not delete {what}: {e}"));
            }
        }
    }

    /// Prompt until the form parses or is dismissed, then save and re-render.
    async fn create<D>(
        &self,
        title: &str,
        form: &str,
        parse: fn(&FormFields) -> Result<D, ValidationError>,
        save: impl FnOnce(&PersistentStore<K>, D) -> Result<String, StorageError>,
    ) {
        let draft = loop {
            let Some(fields) = self.shell.prompt(title, form).await else {
                tracing::debug!("{title} dismissed");
                return;
            };
            match parse(&fields) {
                Ok(draft) => break draft,
                Err(e) => self.notify(NoticeLevel::Error, e.to_string()),
            }
        };

        match save(&self.store, draft) {
            Ok(message) => {
                self.shell.close_modal();
                self.refresh().await;
                self.notify(NoticeLevel::Success, message);
            }
            Err(e) => {
                tracing::error!("{title}: {e}");
                self.notify(NoticeLevel::Error, format!("Could not save: {e}"));
            }
        }
    }

    async fn create_user(&self) {
        self.create("Add user", &render::user_form(), UserDraft::parse, |store, draft| {
            let user = store.add_user(draft.into_user(store.next_user_id()))?;
            Ok(format!("User {} created", user.name))
        })
        .await
    }

    async fn create_task(&self, user_id: u64) {
        self.create("Add task", &render::task_form(), TaskDraft::parse, |store, draft| {
            store.add_task(draft.into_task(store.next_task_id(), user_id))?;
            Ok("Task created".to_string())
        })
        .await
    }

    async fn create_comment(&self, post_id: u64) {
        self.create(
            "Add comment",
            &render::comment_form(),
            CommentDraft::parse,
            |store, draft| {
                store.add_comment(draft.into_comment(store.next_comment_id(), post_id))?;
                Ok(format!("Comment added to post {post_id}"))
            },
        )
        .await
    }

    async fn show_post(&self, id: u64) {
        let post = match self.remote.get_post(id).await {
            Ok(post) => post,
            Err(e) => {
                tracing::warn!("Loading post {id}: {e}");
                self.notify(NoticeLevel::Error, format!("Could not load post {id}"));
                return;
            }
        };
        let author = match self.store.find_user(post.user_id) {
            Some(user) => Some(user.name),
            None => self.remote.get_user(post.user_id).await.ok().map(|u| u.name),
        };
        let html = render::post_details(&post, author.as_deref());
        if let Some(root) = self.shell.open_modal(&format!("Post #{id}"), &html) {
            binder::bind(&root, &self.current_route());
        }
    }

    fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice::new(level, message);
        match level {
            NoticeLevel::Info | NoticeLevel::Success => tracing::info!("{}", notice.message),
            NoticeLevel::Warning => tracing::warn!("{}", notice.message),
            NoticeLevel::Error => tracing::error!("{}", notice.message),
        }
        self.shell.notify(&notice);
        self.log.borrow_mut().push(notice);
    }
}
