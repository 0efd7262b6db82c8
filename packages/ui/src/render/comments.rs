use dioxus::prelude::*;
use store::config::ViewConfig;
use store::Comment;

use super::common::{empty, local_badge, truncate};
use crate::merge::{CommentGroup, PostHeader, Sourced};
use crate::route::Route;

const HEADER_TITLE_LIMIT: usize = 80;

pub(super) fn for_post(post: &PostHeader, comments: &[Sourced<Comment>]) -> Element {
    let title = truncate(&post.title, HEADER_TITLE_LIMIT);
    let body = post.body.clone();
    let post_id = post.id;
    let author = post.author.clone().unwrap_or_default();
    let back_href = Route::posts(post.user_id).to_hash();
    let count = comments.len();

    rsx! {
        div { class: "post-header", "data-post-id": "{post_id}",
            a { class: "btn btn-link", href: "{back_href}", "data-route": "true", "Back to posts" }
            h2 { "{title}" }
            if !author.is_empty() {
                p { class: "post-author", "by {author}" }
            }
            if !body.is_empty() {
                p { class: "post-body", "{body}" }
            }
        }
        div { class: "view-header",
            h3 { "Comments ({count})" }
            button { id: "add-comment-btn", class: "btn btn-primary", "Add comment" }
        }
        if comments.is_empty() {
            {empty("No comments yet.")}
        } else {
            div { class: "comments-list",
                {comments.iter().map(|c| card(c, None))}
            }
        }
    }
}

pub(super) fn grouped(groups: &[CommentGroup], config: &ViewConfig) -> Element {
    let total: usize = groups.iter().map(|g| g.comments.len()).sum();

    rsx! {
        div { class: "view-header",
            h2 { "All comments ({total})" }
        }
        if groups.is_empty() {
            {empty("No comments found.")}
        } else {
            {groups.iter().map(|group| group_block(group, config))}
        }
    }
}

fn group_block(group: &CommentGroup, config: &ViewConfig) -> Element {
    let post_id = group.post_id;
    let href = Route::comments(None, Some(post_id)).to_hash();
    let count = group.comments.len();
    let hidden = count.saturating_sub(config.comments_per_group);

    rsx! {
        div { key: "{post_id}", class: "post-comments-group", "data-post-id": "{post_id}",
            div { class: "group-header",
                h3 { "Post #{post_id}" }
                span { class: "group-count", "{count} comments" }
                a { class: "btn btn-link", href: "{href}", "data-route": "true", "Open post" }
                button { class: "btn btn-secondary add-comment-to-post-btn", "data-post-id": "{post_id}", "Add comment" }
            }
            div { class: "comments-list",
                {group
                    .comments
                    .iter()
                    .take(config.comments_per_group)
                    .map(|c| card(c, Some(config.grouped_body_limit)))}
            }
            if hidden > 0 {
                p { class: "more-comments",
                    a { href: "{href}", "data-route": "true", "and {hidden} more comments" }
                }
            }
        }
    }
}

fn card(comment: &Sourced<Comment>, body_limit: Option<usize>) -> Element {
    let local = comment.is_local();
    let c = &comment.record;
    let id = c.id;
    let name = c.name.clone();
    let email = c.email.clone();
    let body = match body_limit {
        Some(limit) => truncate(&c.body, limit),
        None => c.body.clone(),
    };

    rsx! {
        div { key: "{id}", class: if local { "comment-card comment-local" } else { "comment-card" }, "data-comment-id": "{id}",
            div { class: "comment-header",
                strong { "{name}" }
                span { class: "comment-email", "{email}" }
                if local {
                    {local_badge()}
                }
            }
            p { class: "comment-body", "{body}" }
            if local {
                button { class: "btn btn-danger btn-small delete-comment-btn", "data-comment-id": "{id}", "Delete" }
            }
        }
    }
}
