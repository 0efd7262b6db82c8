//! # Route parser — location fragment → (view, parameters)
//!
//! The client's location is a `#`-delimited path such as
//! `#users#42#posts#7#comments`. [`parse`] walks its segments left to right:
//!
//! | Segment | Effect |
//! |---------|--------|
//! | `users` | Root keyword; never changes the view. |
//! | `todos` / `tasks` | Selects [`View::Tasks`] if no view was chosen yet. |
//! | `posts` | Selects [`View::Posts`] if no view was chosen yet. |
//! | `comments` | Refines Users or Posts into [`View::Comments`]. |
//! | positive integer | Fills `user_id` while it is empty and no `posts` keyword was seen, otherwise `post_id`. |
//!
//! Anything else is logged and skipped. Parsing is total: empty or
//! nonsensical input resolves to the Users view.

use std::fmt;

/// The location used when none is set.
pub const DEFAULT_ROUTE: &str = "#users";

/// One of the four top-level content modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Users,
    Tasks,
    Posts,
    Comments,
}

impl View {
    /// Human-readable name used in headings and crumbs.
    pub fn label(self) -> &'static str {
        match self {
            View::Users => "Users",
            View::Tasks => "Tasks",
            View::Posts => "Posts",
            View::Comments => "Comments",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed location: the active view plus up to two foreign keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Route {
    pub view: View,
    pub user_id: Option<u64>,
    pub post_id: Option<u64>,
}

impl Route {
    pub fn users() -> Self {
        Self::default()
    }

    pub fn user(user_id: u64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    pub fn tasks(user_id: Option<u64>) -> Self {
        Self {
            view: View::Tasks,
            user_id,
            post_id: None,
        }
    }

    pub fn posts(user_id: Option<u64>) -> Self {
        Self {
            view: View::Posts,
            user_id,
            post_id: None,
        }
    }

    pub fn comments(user_id: Option<u64>, post_id: Option<u64>) -> Self {
        Self {
            view: View::Comments,
            user_id,
            post_id,
        }
    }

    /// Canonical location string for this route.
    pub fn to_hash(&self) -> String {
        let mut out = String::from("#users");
        if let Some(user_id) = self.user_id {
            out.push_str(&format!("#{user_id}"));
        }
        match self.view {
            View::Users => {}
            View::Tasks => out.push_str("#todos"),
            View::Posts => out.push_str("#posts"),
            View::Comments => {
                out.push_str("#posts");
                if let Some(post_id) = self.post_id {
                    out.push_str(&format!("#{post_id}"));
                }
                out.push_str("#comments");
            }
        }
        out
    }
}

/// Parse a location fragment. Never fails.
pub fn parse(location: &str) -> Route {
    let mut route = Route::default();
    let mut seen_posts = false;

    for segment in location.split('#').map(str::trim).filter(|s| !s.is_empty()) {
        match segment.to_ascii_lowercase().as_str() {
            "users" => {}
            "todos" | "tasks" => {
                if route.view == View::Users {
                    route.view = View::Tasks;
                } else {
                    tracing::debug!("Route {location:?}: ignoring `{segment}` after {}", route.view);
                }
            }
            "posts" => {
                seen_posts = true;
                if route.view == View::Users {
                    route.view = View::Posts;
                } else {
                    tracing::debug!("Route {location:?}: ignoring `posts` after {}", route.view);
                }
            }
            "comments" => match route.view {
                View::Users | View::Posts => route.view = View::Comments,
                _ => tracing::debug!("Route {location:?}: ignoring `comments` after {}", route.view),
            },
            other => match other.parse::<u64>() {
                Ok(id) if id > 0 => {
                    if route.user_id.is_none() && !seen_posts {
                        route.user_id = Some(id);
                    } else if route.post_id.is_none() {
                        route.post_id = Some(id);
                    } else {
                        tracing::debug!("Route {location:?}: surplus id {id}");
                    }
                }
                _ => tracing::debug!("Route {location:?}: unknown segment `{segment}`"),
            },
        }
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_root_are_users() {
        assert_eq!(parse(""), Route::users());
        assert_eq!(parse("#"), Route::users());
        assert_eq!(parse("#users"), Route::users());
        assert_eq!(parse(""), parse("#users"));
    }

    #[test]
    fn test_full_comment_route() {
        let route = parse("#users#42#posts#7#comments");
        assert_eq!(route, Route::comments(Some(42), Some(7)));
    }

    #[test]
    fn test_user_scoped_views() {
        assert_eq!(parse("#users#5#todos"), Route::tasks(Some(5)));
        assert_eq!(parse("#users#5#tasks"), Route::tasks(Some(5)));
        assert_eq!(parse("#users#5#posts"), Route::posts(Some(5)));
        assert_eq!(parse("#users#5"), Route::user(5));
        assert_eq!(parse("#5#todos"), Route::tasks(Some(5)));
    }

    #[test]
    fn test_integer_after_posts_is_post_id() {
        assert_eq!(
            parse("#users#posts#7#comments"),
            Route::comments(None, Some(7))
        );
        assert_eq!(parse("#users#posts#comments"), Route::comments(None, None));
        assert_eq!(parse("#comments"), Route::comments(None, None));
    }

    #[test]
    fn test_first_view_keyword_wins() {
        assert_eq!(parse("#users#3#todos#posts").view, View::Tasks);
        assert_eq!(parse("#users#3#posts#todos").view, View::Posts);
        assert_eq!(parse("#todos#comments").view, View::Tasks);
    }

    #[test]
    fn test_garbage_is_tolerated() {
        assert_eq!(parse("#nonsense"), Route::users());
        assert_eq!(parse("#users#abc#todos"), Route::tasks(None));
        assert_eq!(parse("#users#0#todos"), Route::tasks(None));
        assert_eq!(parse("#users#-4#posts"), Route::posts(None));
        assert_eq!(parse("##users###5##todos#"), Route::tasks(Some(5)));
        assert_eq!(parse("#USERS#5#TODOS"), Route::tasks(Some(5)));
    }

    #[test]
    fn test_surplus_ids_are_ignored() {
        assert_eq!(
            parse("#users#1#2#3#comments"),
            Route::comments(Some(1), Some(2))
        );
    }

    #[test]
    fn test_to_hash_reparses_to_same_route() {
        let routes = [
            Route::users(),
            Route::user(9),
            Route::tasks(None),
            Route::tasks(Some(4)),
            Route::posts(Some(4)),
            Route::comments(None, None),
            Route::comments(None, Some(12)),
            Route::comments(Some(3), Some(12)),
        ];
        for route in routes {
            assert_eq!(parse(&route.to_hash()), route, "{}", route.to_hash());
        }
        assert_eq!(Route::comments(Some(3), Some(12)).to_hash(), "#users#3#posts#12#comments");
    }
}
