//! Create-form markup shown inside the modal surface.
//!
//! Every form is `#modal-form`; the shell collects its named inputs into a
//! [`FormFields`](crate::forms::FormFields) on submit.

use dioxus::prelude::*;

pub fn user_form() -> String {
    dioxus_ssr::render_element(rsx! {
        form { id: "modal-form", class: "modal-form",
            label { class: "form-field",
                span { "Name *" }
                input { r#type: "text", name: "name", placeholder: "Full name" }
            }
            label { class: "form-field",
                span { "Email *" }
                input { r#type: "email", name: "email", placeholder: "name@example.com" }
            }
            label { class: "form-field",
                span { "Phone" }
                input { r#type: "tel", name: "phone" }
            }
            label { class: "form-field",
                span { "City" }
                input { r#type: "text", name: "city" }
            }
            label { class: "form-field",
                span { "Company" }
                input { r#type: "text", name: "company" }
            }
            {actions()}
        }
    })
}

pub fn task_form() -> String {
    dioxus_ssr::render_element(rsx! {
        form { id: "modal-form", class: "modal-form",
            label { class: "form-field",
                span { "Title *" }
                input { r#type: "text", name: "title", placeholder: "What needs doing?" }
            }
            label { class: "form-field form-check",
                input { r#type: "checkbox", name: "completed", value: "true" }
                span { "Completed" }
            }
            {actions()}
        }
    })
}

pub fn comment_form() -> String {
    dioxus_ssr::render_element(rsx! {
        form { id: "modal-form", class: "modal-form",
            label { class: "form-field",
                span { "Name *" }
                input { r#type: "text", name: "name" }
            }
            label { class: "form-field",
                span { "Email *" }
                input { r#type: "email", name: "email", placeholder: "name@example.com" }
            }
            label { class: "form-field",
                span { "Comment *" }
                textarea { name: "body", rows: "4" }
            }
            {actions()}
        }
    })
}

/// Body of the yes/no gate used before deletes.
pub fn confirm_dialog(message: &str) -> String {
    let message = message.to_string();
    dioxus_ssr::render_element(rsx! {
        div { class: "confirm-dialog",
            p { class: "confirm-message", "{message}" }
            div { class: "form-actions",
                button { id: "confirm-no", class: "btn btn-secondary", "Cancel" }
                button { id: "confirm-yes", class: "btn btn-danger", "Delete" }
            }
        }
    })
}

fn actions() -> Element {
    rsx! {
        div { class: "form-actions",
            button { r#type: "submit", class: "btn btn-primary", "Save" }
        }
    }
}
