use dioxus::prelude::*;
use store::config::ViewConfig;
use store::Post;

use super::common::{empty, truncate};
use crate::merge::Owner;
use crate::route::Route;

pub(super) fn list(owner: Option<&Owner>, posts: &[Post], config: &ViewConfig) -> Element {
    let heading = match owner {
        Some(owner) => format!("Posts of {} ({})", owner.name, posts.len()),
        None => format!("All posts ({})", posts.len()),
    };

    rsx! {
        div { class: "view-header",
            h2 { "{heading}" }
        }
        if posts.is_empty() {
            {empty("No posts found.")}
        } else {
            div { class: "cards-grid",
                {posts.iter().map(|post| card(post, config))}
            }
        }
    }
}

fn card(post: &Post, config: &ViewConfig) -> Element {
    let id = post.id;
    let user_id = post.user_id;
    let title = truncate(&post.title, config.title_limit);
    let body = truncate(&post.body, config.body_limit);
    let comments_href = Route::comments(Some(user_id), Some(id)).to_hash();
    let author_href = Route::user(user_id).to_hash();

    rsx! {
        div { key: "{id}", class: "card", "data-post-id": "{id}",
            div { class: "card-header",
                h3 { "{title}" }
                a { class: "post-author", href: "{author_href}", "data-route": "true", "User {user_id}" }
            }
            div { class: "card-body",
                p { "{body}" }
            }
            div { class: "card-actions",
                a { class: "btn btn-secondary", href: "{comments_href}", "data-route": "true", "Comments" }
                button { class: "btn btn-link view-post-btn", "data-post-id": "{id}", "Details" }
            }
        }
    }
}

pub(super) fn details(post: &Post, author: Option<&str>) -> Element {
    let id = post.id;
    let title = post.title.clone();
    let body = post.body.clone();
    let author = author
        .map(str::to_string)
        .unwrap_or_else(|| format!("User {}", post.user_id));
    let comments_href = Route::comments(Some(post.user_id), Some(id)).to_hash();

    rsx! {
        div { class: "post-details", "data-post-id": "{id}",
            h3 { "{title}" }
            p { class: "post-author", "by {author}" }
            p { class: "post-body", "{body}" }
            a { class: "btn btn-secondary", href: "{comments_href}", "data-route": "true", "View comments" }
        }
    }
}
