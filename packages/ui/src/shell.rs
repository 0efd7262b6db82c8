//! The host page as seen by the controller.
//!
//! A [`Shell`] owns the fixed chrome around the core: the location fragment,
//! the content and breadcrumb mount points, the search box, the modal surface
//! and the toast area. The browser implementation lives in the `web` package;
//! tests use a recording fake.

use std::future::Future;

use crate::binder::FragmentRoot;
use crate::forms::FormFields;
use crate::notify::Notice;
use crate::route::View;

pub trait Shell {
    type Root: FragmentRoot;

    /// Current location fragment, including the leading `#`.
    fn location(&self) -> String;

    /// Change the location. The host reports the change back through the
    /// controller's route-change entry point.
    fn set_location(&self, hash: &str);

    fn search_query(&self) -> String;

    /// Replace the content area; returns the new fragment for binding.
    fn mount_content(&self, html: &str) -> Option<Self::Root>;

    fn mount_breadcrumbs(&self, html: &str) -> Option<Self::Root>;

    /// Highlight the navigation entry for `view`.
    fn set_active_view(&self, view: View);

    fn open_modal(&self, title: &str, html: &str) -> Option<Self::Root>;

    fn close_modal(&self);

    /// Show a form in the modal and resolve with its fields on submit, or
    /// `None` when the user dismisses it. Calling again while the same form is
    /// open keeps the user's input and waits for the next submit.
    fn prompt(&self, title: &str, form_html: &str) -> impl Future<Output = Option<FormFields>>;

    /// Yes/no gate resolved asynchronously.
    fn confirm(&self, message: &str) -> impl Future<Output = bool>;

    fn notify(&self, notice: &Notice);
}
