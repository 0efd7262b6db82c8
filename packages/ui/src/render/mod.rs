//! # View renderer — merged data to HTML fragments
//!
//! Every function here is pure: it takes already-loaded data and returns a
//! markup string. Fragments are written with `rsx!` and serialised by
//! `dioxus-ssr`, which escapes interpolated text nodes. It does not escape
//! attribute values: any record field placed in an attribute goes through
//! `common::escape_attr` first. IDs and route hashes are the only other
//! dynamic attribute values.
//!
//! ## Marker contract
//!
//! The binder finds interactive elements by these markers; they must stay in
//! sync with [`crate::binder`].
//!
//! | Marker | Emitted by |
//! |--------|-----------|
//! | `a[data-route]` | every in-page link |
//! | `#add-user-btn` | users list |
//! | `.delete-user-btn[data-user-id]` | local user cards |
//! | `#add-todo-btn` | tasks of one user |
//! | `.delete-todo-btn[data-todo-id]` | local task rows |
//! | `.view-post-btn[data-post-id]` | post cards |
//! | `#add-comment-btn` | comments of one post |
//! | `.add-comment-to-post-btn[data-post-id]` | comment groups |
//! | `.delete-comment-btn[data-comment-id]` | local comments |

use dioxus::prelude::*;
use store::config::ViewConfig;
use store::Post;

use crate::merge::{Dataset, Loaded};

mod comments;
mod common;
mod forms;
mod posts;
mod tasks;
mod users;

pub use common::truncate;
pub use forms::{comment_form, confirm_dialog, task_form, user_form};

/// Render one load result: warning banners, then the view body.
pub fn render(loaded: &Loaded, config: &ViewConfig) -> String {
    let banners = common::banners(loaded);
    let body = match &loaded.data {
        Dataset::Users(users) => users::list(users),
        Dataset::UserDetail(user) => users::detail(user.as_ref()),
        Dataset::Tasks { owner, tasks } => tasks::table(owner.as_ref(), tasks, config),
        Dataset::Posts { owner, posts } => posts::list(owner.as_ref(), posts, config),
        Dataset::PostComments { post, comments } => comments::for_post(post, comments),
        Dataset::CommentGroups(groups) => comments::grouped(groups, config),
    };
    dioxus_ssr::render_element(rsx! {
        {banners}
        {body}
    })
}

/// Placeholder shown while a load is in flight.
pub fn loading() -> String {
    dioxus_ssr::render_element(rsx! {
        div { class: "loading", "Loading..." }
    })
}

/// Modal body for a single post.
pub fn post_details(post: &Post, author: Option<&str>) -> String {
    dioxus_ssr::render_element(posts::details(post, author))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{CommentGroup, Owner, PostHeader, Sourced, Warning};
    use crate::route::Route;
    use crate::testing::{comment, post, task, user};
    use api::ApiError;

    fn loaded(route: Route, data: Dataset) -> Loaded {
        Loaded {
            route,
            data,
            warnings: vec![],
        }
    }

    #[test]
    fn test_untrusted_text_is_escaped() {
        let mut evil = user(3, "<script>alert(1)</script>");
        evil.email = "\"><img src=x>@x.io".into();
        let html = render(
            &loaded(Route::users(), Dataset::Users(vec![Sourced::remote(evil)])),
            &ViewConfig::default(),
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_task_title_cannot_break_out_of_attribute() {
        let mut evil = task(201, 1, r#"x" onmouseover="alert(1)"#);
        evil.completed = true;
        let html = render(
            &loaded(
                Route::tasks(None),
                Dataset::Tasks { owner: None, tasks: vec![Sourced::local(evil)] },
            ),
            &ViewConfig::default(),
        );
        assert!(!html.contains("\" onmouseover=\""), "{html}");
        assert!(html.contains("title=\"x&quot; onmouseover=&quot;alert(1)&quot;\""), "{html}");
    }

    #[test]
    fn test_empty_views_show_placeholder() {
        let config = ViewConfig::default();
        for data in [
            Dataset::Users(vec![]),
            Dataset::Tasks { owner: None, tasks: vec![] },
            Dataset::Posts { owner: None, posts: vec![] },
            Dataset::CommentGroups(vec![]),
            Dataset::UserDetail(None),
        ] {
            let html = render(&loaded(Route::users(), data), &config);
            assert!(html.contains("message-info"), "{html}");
        }
    }

    #[test]
    fn test_network_warning_banner_above_content() {
        let mut out = loaded(
            Route::tasks(Some(5)),
            Dataset::Tasks {
                owner: Some(Owner { id: 5, name: "Chelsey".into() }),
                tasks: vec![Sourced::local(task(9_000, 5, "offline"))],
            },
        );
        out.warnings.push(Warning::Network(ApiError::Transport {
            url: "https://x/todos".into(),
            reason: "down".into(),
        }));
        let html = render(&out, &ViewConfig::default());
        let banner = html.find("message-warning").unwrap();
        let row = html.find("data-todo-id").unwrap();
        assert!(banner < row);
        assert!(html.contains("Tasks of Chelsey"));
    }

    #[test]
    fn test_list_headings_show_counts() {
        let config = ViewConfig::default();
        let users = render(
            &loaded(
                Route::users(),
                Dataset::Users(vec![Sourced::remote(user(1, "A")), Sourced::local(user(11, "B"))]),
            ),
            &config,
        );
        assert!(users.contains("Users (2)"), "{users}");

        let tasks = render(
            &loaded(
                Route::tasks(None),
                Dataset::Tasks { owner: None, tasks: vec![Sourced::remote(task(1, 1, "t"))] },
            ),
            &config,
        );
        assert!(tasks.contains("All tasks (1)"), "{tasks}");

        let posts = render(
            &loaded(
                Route::posts(Some(5)),
                Dataset::Posts {
                    owner: Some(Owner { id: 5, name: "Chelsey".into() }),
                    posts: vec![post(7, 5, "a", "b"), post(8, 5, "c", "d")],
                },
            ),
            &config,
        );
        assert!(posts.contains("Posts of Chelsey (2)"), "{posts}");

        let groups = vec![
            CommentGroup { post_id: 1, comments: vec![Sourced::remote(comment(1, 1, "x"))] },
            CommentGroup {
                post_id: 2,
                comments: vec![
                    Sourced::remote(comment(2, 2, "y")),
                    Sourced::remote(comment(3, 2, "z")),
                ],
            },
        ];
        let comments = render(
            &loaded(Route::comments(None, None), Dataset::CommentGroups(groups)),
            &config,
        );
        assert!(comments.contains("All comments (3)"), "{comments}");
    }

    #[test]
    fn test_post_cards_truncate_title_and_body() {
        let long_title = "t".repeat(60);
        let long_body = "b".repeat(200);
        let html = render(
            &loaded(
                Route::posts(None),
                Dataset::Posts {
                    owner: None,
                    posts: vec![post(7, 5, &long_title, &long_body)],
                },
            ),
            &ViewConfig::default(),
        );
        assert!(html.contains(&format!("{}...", "t".repeat(50))));
        assert!(html.contains(&format!("{}...", "b".repeat(150))));
        assert!(!html.contains(&long_title));
        assert!(html.contains("data-post-id=\"7\""));
    }

    #[test]
    fn test_grouped_comments_are_capped() {
        let comments: Vec<_> = (1..=5)
            .map(|id| Sourced::remote(comment(id, 9, &"x".repeat(120))))
            .collect();
        let html = render(
            &loaded(
                Route::comments(None, None),
                Dataset::CommentGroups(vec![CommentGroup { post_id: 9, comments }]),
            ),
            &ViewConfig::default(),
        );
        assert_eq!(html.matches("data-comment-id=").count(), 3);
        assert!(html.contains("and 2 more comments"));
        assert!(html.contains(&format!("{}...", "x".repeat(100))));
        assert!(html.contains("add-comment-to-post-btn"));
    }

    #[test]
    fn test_per_post_comments_are_not_capped() {
        let comments: Vec<_> = (1..=5)
            .map(|id| Sourced::remote(comment(id, 9, &"y".repeat(300))))
            .collect();
        let html = render(
            &loaded(
                Route::comments(None, Some(9)),
                Dataset::PostComments {
                    post: PostHeader {
                        id: 9,
                        user_id: None,
                        title: "Post #9".into(),
                        body: String::new(),
                        author: None,
                    },
                    comments,
                },
            ),
            &ViewConfig::default(),
        );
        assert_eq!(html.matches("data-comment-id=").count(), 5);
        assert!(html.contains(&"y".repeat(300)));
        assert!(!html.contains("more comments"));
        assert!(html.contains("id=\"add-comment-btn\""));
    }

    #[test]
    fn test_local_badge_follows_origin_not_id() {
        let html = render(
            &loaded(
                Route::users(),
                Dataset::Users(vec![
                    Sourced::local(user(4, "Low id but local")),
                    Sourced::remote(user(999_999, "High id but remote")),
                ]),
            ),
            &ViewConfig::default(),
        );
        assert_eq!(html.matches("(Local)").count(), 1);
        assert_eq!(html.matches("delete-user-btn").count(), 1);
        assert!(html.contains("data-user-id=\"4\""));
    }

    #[test]
    fn test_user_detail_and_post_details() {
        let html = render(
            &loaded(Route::user(5), Dataset::UserDetail(Some(Sourced::remote(user(5, "Chelsey"))))),
            &ViewConfig::default(),
        );
        assert!(html.contains("href=\"#users#5#todos\""));
        assert!(html.contains("Chelsey"));

        let details = post_details(&post(7, 5, "Hello", "World"), None);
        assert!(details.contains("by User 5"));
        assert!(details.contains("#users#5#posts#7#comments"));
        assert!(loading().contains("Loading"));
    }
}
