//! # Event binder — markers in a mounted fragment to [`Action`]s
//!
//! After each render the shell mounts the fragment and hands back a
//! [`FragmentRoot`]. [`bind`] scans it for the marker set emitted by
//! [`crate::render`] and attaches exactly one [`Action`] per matching element.
//! Old nodes are discarded by every mount, so binding never doubles up.
//!
//! Links carrying `data-route` become [`Action::Navigate`] and go through the
//! same entry point as the address bar.

use crate::route::Route;

/// What a click on a bound element asks the controller to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    CreateUser,
    CreateTask { user_id: u64 },
    CreateComment { post_id: u64 },
    DeleteUser(u64),
    DeleteTask(u64),
    DeleteComment(u64),
    ShowPost(u64),
}

/// A mounted fragment the binder can query and attach handlers to.
pub trait FragmentRoot {
    type Node;

    /// Every element under the root matching a simple CSS selector.
    fn select_all(&self, selector: &str) -> Vec<Self::Node>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    /// Make a click on `node` dispatch `action` (default navigation suppressed).
    fn attach(&self, node: &Self::Node, action: Action);
}

const ID_MARKERS: &[(&str, &str, fn(u64) -> Action)] = &[
    (".delete-user-btn", "data-user-id", Action::DeleteUser),
    (".delete-todo-btn", "data-todo-id", Action::DeleteTask),
    (".delete-comment-btn", "data-comment-id", Action::DeleteComment),
    (".view-post-btn", "data-post-id", Action::ShowPost),
    (".add-comment-to-post-btn", "data-post-id", |post_id| Action::CreateComment { post_id }),
];

/// Attach handlers for every marker under `root`. Returns how many were bound.
pub fn bind<F: FragmentRoot>(root: &F, route: &Route) -> usize {
    let mut bound = 0;

    for node in root.select_all("a[data-route]") {
        match root.attribute(&node, "href") {
            Some(href) => {
                root.attach(&node, Action::Navigate(href));
                bound += 1;
            }
            None => tracing::warn!("Route link without href"),
        }
    }

    for (selector, attr, action) in ID_MARKERS {
        for node in root.select_all(selector) {
            let id = root
                .attribute(&node, attr)
                .and_then(|raw| raw.trim().parse::<u64>().ok());
            match id {
                Some(id) => {
                    root.attach(&node, action(id));
                    bound += 1;
                }
                None => tracing::warn!("{selector} without a numeric {attr}"),
            }
        }
    }

    for node in root.select_all("#add-user-btn") {
        root.attach(&node, Action::CreateUser);
        bound += 1;
    }

    if let Some(user_id) = route.user_id {
        for node in root.select_all("#add-todo-btn") {
            root.attach(&node, Action::CreateTask { user_id });
            bound += 1;
        }
    }

    if let Some(post_id) = route.post_id {
        for node in root.select_all("#add-comment-btn") {
            root.attach(&node, Action::CreateComment { post_id });
            bound += 1;
        }
    }

    tracing::debug!("Bound {bound} handlers for {}", route.to_hash());
    bound
}
