use dioxus::prelude::*;
use store::config::ViewConfig;
use store::Task;

use super::common::{empty, escape_attr, local_badge, truncate};
use crate::merge::{Owner, Sourced};
use crate::route::Route;

pub(super) fn table(owner: Option<&Owner>, tasks: &[Sourced<Task>], config: &ViewConfig) -> Element {
    let heading = match owner {
        Some(owner) => format!("Tasks of {} ({})", owner.name, tasks.len()),
        None => format!("All tasks ({})", tasks.len()),
    };
    let done = tasks.iter().filter(|t| t.record.completed).count();
    let total = tasks.len();

    rsx! {
        div { class: "view-header",
            h2 { "{heading}" }
            if owner.is_some() {
                button { id: "add-todo-btn", class: "btn btn-primary", "Add task" }
            }
        }
        if tasks.is_empty() {
            {empty("No tasks found.")}
        } else {
            p { class: "summary", "{done} of {total} completed" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Title" }
                        th { "User" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    {tasks.iter().map(|task| row(task, config.title_limit))}
                }
            }
        }
    }
}

fn row(task: &Sourced<Task>, title_limit: usize) -> Element {
    let local = task.is_local();
    let t = &task.record;
    let id = t.id;
    let user_id = t.user_id;
    let title = truncate(&t.title, title_limit);
    let full_title = escape_attr(&t.title);
    let user_href = Route::user(user_id).to_hash();
    let (status_class, status) = if t.completed {
        ("status status-done", "Completed")
    } else {
        ("status status-pending", "Pending")
    };

    rsx! {
        tr { key: "{id}", class: if local { "row-local" } else { "" }, "data-todo-id": "{id}",
            td { "{id}" }
            td { title: "{full_title}",
                "{title}"
                if local {
                    {local_badge()}
                }
            }
            td {
                a { href: "{user_href}", "data-route": "true", "User {user_id}" }
            }
            td {
                span { class: "{status_class}", "{status}" }
            }
            td {
                if local {
                    button { class: "btn btn-danger btn-small delete-todo-btn", "data-todo-id": "{id}", "Delete" }
                }
            }
        }
    }
}
