use dioxus::prelude::*;
use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Configuration shipped with the bundle.
const CLIENT_TOML: &str = include_str!("../client.toml");

fn main() {
    dioxus::launch(App);
}

#[cfg_attr(not(all(target_arch = "wasm32", feature = "web")), allow(dead_code))]
fn client_config() -> ClientConfig {
    ClientConfig::from_toml(CLIENT_TOML).unwrap_or_else(|e| {
        tracing::warn!("Bundled {} is invalid, using defaults: {e}", ClientConfig::filename());
        ClientConfig::default()
    })
}

/// Static chrome. Everything inside `#content`, `#breadcrumbs` and the modal
/// body is owned by the route-driven core, not by Dioxus.
#[component]
fn App() -> Element {
    use_effect(|| {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        browser::boot(client_config());
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        header { class: "app-header",
            h1 { class: "app-title", "Directory" }
            nav { class: "main-nav",
                a { class: "nav-link", href: "#users", "data-view": "users", "Users" }
                a { class: "nav-link", href: "#users#todos", "data-view": "tasks", "Tasks" }
                a { class: "nav-link", href: "#users#posts", "data-view": "posts", "Posts" }
                a { class: "nav-link", href: "#users#posts#comments", "data-view": "comments", "Comments" }
            }
            input { id: "search-input", class: "search-input", r#type: "search", placeholder: "Search..." }
        }
        div { id: "breadcrumbs" }
        main { id: "content", class: "content" }
        div { id: "modal", class: "modal hidden",
            div { class: "modal-content",
                div { class: "modal-header",
                    h3 { id: "modal-title" }
                    button { id: "modal-close", class: "modal-close", "x" }
                }
                div { id: "modal-body" }
            }
        }
        div { id: "notifications", class: "notifications" }
    }
}
