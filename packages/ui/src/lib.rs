//! # UI crate — route-driven view composition
//!
//! The platform-free core of the client. A location change flows through the
//! modules below in order; the web entry point only supplies a [`Shell`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`route`] | Parse `#users#5#posts#7#comments` into a [`Route`] |
//! | [`breadcrumbs`] | Build and render the crumb trail for a location |
//! | [`search`] | Case-insensitive substring filtering ([`SearchQuery`], [`Searchable`]) |
//! | [`merge`] | [`Merger`]: local-first overlay of store and remote data per view |
//! | [`render`] | Pure HTML fragments for every view, produced with `rsx!` and `dioxus-ssr` |
//! | [`forms`] | Create-form field sets and their validation |
//! | [`binder`] | Scan a mounted fragment for interactive markers and attach [`Action`]s |
//! | [`notify`] | Transient notices and the in-memory activity log |
//! | [`shell`] | The [`Shell`] trait: everything the core needs from the host page |
//! | [`app`] | [`App`], owner of the single route-change entry point |

pub mod app;
pub mod binder;
pub mod breadcrumbs;
pub mod forms;
pub mod merge;
pub mod notify;
pub mod render;
pub mod route;
pub mod search;
pub mod shell;

#[cfg(test)]
mod testing;

pub use app::{App, RenderOutcome};
pub use binder::{bind, Action, FragmentRoot};
pub use breadcrumbs::Crumb;
pub use forms::{FormFields, ValidationError};
pub use merge::{Dataset, Loaded, Merger, Origin, Sourced, Warning};
pub use notify::{ActivityLog, Notice, NoticeLevel};
pub use route::{parse, Route, View, DEFAULT_ROUTE};
pub use search::{SearchQuery, Searchable};
pub use shell::Shell;
