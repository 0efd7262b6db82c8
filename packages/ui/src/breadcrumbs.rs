//! Breadcrumb trail for the current location.
//!
//! [`build`] always starts with a Home crumb pointing at the Users root, adds
//! one crumb per semantic level of the route, and marks only the last one as
//! current. [`render`] turns the trail into markup whose links carry
//! `data-route`, so they go through the same navigation path as every other
//! in-page link.

use dioxus::prelude::*;

use crate::route::{self, Route, View, DEFAULT_ROUTE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub path: String,
    pub current: bool,
}

impl Crumb {
    fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            current: false,
        }
    }
}

pub fn build(location: &str) -> Vec<Crumb> {
    build_for(&route::parse(location))
}

pub fn build_for(route: &Route) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb::link("Home", DEFAULT_ROUTE)];

    if let Some(user_id) = route.user_id {
        crumbs.push(Crumb::link(
            format!("User {user_id}"),
            Route::user(user_id).to_hash(),
        ));
    }

    match route.view {
        View::Users => {}
        View::Tasks => crumbs.push(Crumb::link("Tasks", Route::tasks(route.user_id).to_hash())),
        View::Posts => crumbs.push(Crumb::link("Posts", Route::posts(route.user_id).to_hash())),
        View::Comments => {
            crumbs.push(Crumb::link("Posts", Route::posts(route.user_id).to_hash()));
            let label = match route.post_id {
                Some(post_id) => format!("Comments for post {post_id}"),
                None => "Comments".to_string(),
            };
            crumbs.push(Crumb::link(label, route.to_hash()));
        }
    }

    if let Some(last) = crumbs.last_mut() {
        last.current = true;
    }
    crumbs
}

pub fn render(crumbs: &[Crumb]) -> String {
    dioxus_ssr::render_element(rsx! {
        nav { class: "breadcrumbs",
            ul { class: "breadcrumbs-list",
                {crumbs.iter().map(|crumb| {
                    let label = crumb.label.clone();
                    let path = crumb.path.clone();
                    if crumb.current {
                        rsx! {
                            li { class: "breadcrumb-item",
                                span { class: "breadcrumb-current", "{label}" }
                            }
                        }
                    } else {
                        rsx! {
                            li { class: "breadcrumb-item",
                                a { class: "breadcrumb-link", href: "{path}", "data-route": "true", "{label}" }
                            }
                        }
                    }
                })}
            }
        }
    })
}
