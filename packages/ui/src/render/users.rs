use dioxus::prelude::*;
use store::User;

use super::common::{empty, local_badge};
use crate::merge::Sourced;
use crate::route::Route;

pub(super) fn list(users: &[Sourced<User>]) -> Element {
    let count = users.len();

    rsx! {
        div { class: "view-header",
            h2 { "Users ({count})" }
            button { id: "add-user-btn", class: "btn btn-primary", "Add user" }
        }
        if users.is_empty() {
            {empty("No users found.")}
        } else {
            div { class: "cards-grid",
                {users.iter().map(card)}
            }
        }
    }
}

fn card(user: &Sourced<User>) -> Element {
    let local = user.is_local();
    let u = &user.record;
    let id = u.id;
    let name = u.name.clone();
    let email = u.email.clone();
    let phone = u.phone.clone().unwrap_or_else(|| "-".to_string());
    let city = u.city().unwrap_or("-").to_string();
    let company = u.company_name().unwrap_or("-").to_string();
    let tasks_href = Route::tasks(Some(id)).to_hash();
    let posts_href = Route::posts(Some(id)).to_hash();
    let detail_href = Route::user(id).to_hash();

    rsx! {
        div { key: "{id}", class: if local { "card card-local" } else { "card" }, "data-user-id": "{id}",
            div { class: "card-header",
                h3 { "{name}" }
                if local {
                    {local_badge()}
                }
            }
            div { class: "card-body",
                p { strong { "Email: " } "{email}" }
                p { strong { "Phone: " } "{phone}" }
                p { strong { "City: " } "{city}" }
                p { strong { "Company: " } "{company}" }
            }
            div { class: "card-actions",
                a { class: "btn btn-secondary", href: "{tasks_href}", "data-route": "true", "Tasks" }
                a { class: "btn btn-secondary", href: "{posts_href}", "data-route": "true", "Posts" }
                a { class: "btn btn-link", href: "{detail_href}", "data-route": "true", "Details" }
                if local {
                    button { class: "btn btn-danger delete-user-btn", "data-user-id": "{id}", "Delete" }
                }
            }
        }
    }
}

pub(super) fn detail(user: Option<&Sourced<User>>) -> Element {
    let Some(user) = user else {
        return empty("User not found.");
    };
    let local = user.is_local();
    let u = &user.record;
    let id = u.id;
    let name = u.name.clone();
    let email = u.email.clone();
    let username = u.username.clone().unwrap_or_else(|| "-".to_string());
    let phone = u.phone.clone().unwrap_or_else(|| "-".to_string());
    let website = u.website.clone().unwrap_or_else(|| "-".to_string());
    let address = u
        .address
        .as_ref()
        .map(|a| {
            [a.street.as_str(), a.suite.as_str(), a.city.as_str(), a.zipcode.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| "-".to_string());
    let company = u.company_name().unwrap_or("-").to_string();
    let catch_phrase = u
        .company
        .as_ref()
        .map(|c| c.catch_phrase.clone())
        .unwrap_or_default();
    let tasks_href = Route::tasks(Some(id)).to_hash();
    let posts_href = Route::posts(Some(id)).to_hash();

    rsx! {
        div { class: "card user-detail", "data-user-id": "{id}",
            div { class: "card-header",
                h2 { "{name}" }
                if local {
                    {local_badge()}
                }
            }
            div { class: "card-body",
                p { strong { "Username: " } "{username}" }
                p { strong { "Email: " } "{email}" }
                p { strong { "Phone: " } "{phone}" }
                p { strong { "Website: " } "{website}" }
                p { strong { "Address: " } "{address}" }
                p { strong { "Company: " } "{company}" }
                if !catch_phrase.is_empty() {
                    p { class: "catch-phrase", "{catch_phrase}" }
                }
            }
            div { class: "card-actions",
                a { class: "btn btn-secondary", href: "{tasks_href}", "data-route": "true", "Tasks" }
                a { class: "btn btn-secondary", href: "{posts_href}", "data-route": "true", "Posts" }
                if local {
                    button { class: "btn btn-danger delete-user-btn", "data-user-id": "{id}", "Delete" }
                }
            }
        }
    }
}
