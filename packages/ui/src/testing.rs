//! Test doubles: record builders, a recording [`Shell`], a fragment root over
//! rendered HTML, a write-rejecting backend, and a remote whose responses can
//! be held back.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use api::{ApiError, RemoteSource, StaticRemote};
use once_cell::sync::Lazy;
use regex::Regex;
use store::{Comment, KeyValueStore, MemoryStore, Post, StorageError, Task, User};

use crate::binder::{Action, FragmentRoot};
use crate::forms::FormFields;
use crate::notify::Notice;
use crate::route::View;
use crate::shell::Shell;

pub fn user(id: u64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        ..Default::default()
    }
}

pub fn task(id: u64, user_id: u64, title: &str) -> Task {
    Task {
        id,
        user_id,
        title: title.to_string(),
        completed: false,
    }
}

pub fn post(id: u64, user_id: u64, title: &str, body: &str) -> Post {
    Post {
        id,
        user_id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

pub fn comment(id: u64, post_id: u64, body: &str) -> Comment {
    Comment {
        id,
        post_id,
        name: format!("Commenter {id}"),
        email: format!("c{id}@example.com"),
        body: body.to_string(),
    }
}

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([a-zA-Z][a-zA-Z0-9]*)([^>]*)>").unwrap());
static ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)(?:="([^"]*)")?"#).unwrap());

struct ParsedElement {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl ParsedElement {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// `tag`, `#id`, `.class`, each optionally followed by `[attr]`.
    fn matches(&self, selector: &str) -> bool {
        let (head, required) = match selector.split_once('[') {
            Some((head, rest)) => (head, Some(rest.trim_end_matches(']'))),
            None => (selector, None),
        };
        if let Some(attr) = required {
            if self.attr(attr).is_none() {
                return false;
            }
        }
        if let Some(id) = head.strip_prefix('#') {
            self.attr("id") == Some(id)
        } else if let Some(class) = head.strip_prefix('.') {
            self.attr("class")
                .is_some_and(|c| c.split_whitespace().any(|c| c == class))
        } else {
            head.is_empty() || self.tag == head
        }
    }
}

fn unescape(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&#x2f;", "/")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// [`FragmentRoot`] over a rendered HTML string; records what gets attached.
#[derive(Clone)]
pub struct HtmlFragment {
    elements: Rc<Vec<ParsedElement>>,
    attached: Rc<RefCell<Vec<Action>>>,
}

impl HtmlFragment {
    pub fn new(html: &str) -> Self {
        let elements = TAG
            .captures_iter(html)
            .map(|cap| ParsedElement {
                tag: cap[1].to_ascii_lowercase(),
                attrs: ATTR
                    .captures_iter(&cap[2])
                    .map(|a| {
                        let value = a.get(2).map_or("", |m| m.as_str());
                        (a[1].to_string(), unescape(value))
                    })
                    .collect(),
            })
            .collect();
        Self {
            elements: Rc::new(elements),
            attached: Rc::default(),
        }
    }

    pub fn attached(&self) -> Vec<Action> {
        self.attached.borrow().clone()
    }
}

impl FragmentRoot for HtmlFragment {
    type Node = usize;

    fn select_all(&self, selector: &str) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.matches(selector))
            .map(|(i, _)| i)
            .collect()
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        self.elements[*node].attr(name).map(str::to_string)
    }

    fn attach(&self, _node: &usize, action: Action) {
        self.attached.borrow_mut().push(action);
    }
}

/// Records everything the controller does to the page. Confirmations and
/// form submissions are scripted up front.
#[derive(Default)]
pub struct FakeShell {
    location: RefCell<String>,
    search: RefCell<String>,
    content: RefCell<Option<HtmlFragment>>,
    content_html: RefCell<String>,
    crumbs: RefCell<String>,
    mounts: Cell<usize>,
    active: Cell<Option<View>>,
    modal: RefCell<Option<(String, String)>>,
    modal_root: RefCell<Option<HtmlFragment>>,
    confirms: RefCell<VecDeque<bool>>,
    prompts: RefCell<VecDeque<Option<FormFields>>>,
    prompt_count: Cell<usize>,
    notices: RefCell<Vec<Notice>>,
}

impl FakeShell {
    pub fn at(location: &str) -> Self {
        let shell = Self::default();
        shell.location.replace(location.to_string());
        shell
    }

    pub fn set_search(&self, query: &str) {
        self.search.replace(query.to_string());
    }

    pub fn script_confirm(&self, answer: bool) {
        self.confirms.borrow_mut().push_back(answer);
    }

    pub fn script_prompt(&self, fields: Option<FormFields>) {
        self.prompts.borrow_mut().push_back(fields);
    }

    pub fn content(&self) -> String {
        self.content_html.borrow().clone()
    }

    pub fn crumbs(&self) -> String {
        self.crumbs.borrow().clone()
    }

    pub fn mount_count(&self) -> usize {
        self.mounts.get()
    }

    /// Actions bound in the current content fragment.
    pub fn actions(&self) -> Vec<Action> {
        self.content
            .borrow()
            .as_ref()
            .map(HtmlFragment::attached)
            .unwrap_or_default()
    }

    pub fn modal(&self) -> Option<(String, String)> {
        self.modal.borrow().clone()
    }

    pub fn modal_open(&self) -> bool {
        self.modal.borrow().is_some()
    }

    pub fn modal_actions(&self) -> Vec<Action> {
        self.modal_root
            .borrow()
            .as_ref()
            .map(HtmlFragment::attached)
            .unwrap_or_default()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompt_count.get()
    }

    pub fn active_view(&self) -> Option<View> {
        self.active.get()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Shell for FakeShell {
    type Root = HtmlFragment;

    fn location(&self) -> String {
        self.location.borrow().clone()
    }

    fn set_location(&self, hash: &str) {
        self.location.replace(hash.to_string());
    }

    fn search_query(&self) -> String {
        self.search.borrow().clone()
    }

    fn mount_content(&self, html: &str) -> Option<HtmlFragment> {
        let root = HtmlFragment::new(html);
        self.content_html.replace(html.to_string());
        self.content.replace(Some(root.clone()));
        self.mounts.set(self.mounts.get() + 1);
        Some(root)
    }

    fn mount_breadcrumbs(&self, html: &str) -> Option<HtmlFragment> {
        self.crumbs.replace(html.to_string());
        Some(HtmlFragment::new(html))
    }

    fn set_active_view(&self, view: View) {
        self.active.set(Some(view));
    }

    fn open_modal(&self, title: &str, html: &str) -> Option<HtmlFragment> {
        let root = HtmlFragment::new(html);
        self.modal.replace(Some((title.to_string(), html.to_string())));
        self.modal_root.replace(Some(root.clone()));
        Some(root)
    }

    fn close_modal(&self) {
        self.modal.replace(None);
        self.modal_root.replace(None);
    }

    async fn prompt(&self, title: &str, form_html: &str) -> Option<FormFields> {
        self.prompt_count.set(self.prompt_count.get() + 1);
        self.modal
            .replace(Some((title.to_string(), form_html.to_string())));
        let answer = self.prompts.borrow_mut().pop_front().flatten();
        if answer.is_none() {
            self.close_modal();
        }
        answer
    }

    async fn confirm(&self, _message: &str) -> bool {
        self.confirms.borrow_mut().pop_front().unwrap_or(false)
    }

    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

/// Backend that serves reads and rejects every write.
#[derive(Clone, Debug, Default)]
pub struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

/// Wraps a [`StaticRemote`], holding each listed call back by the next
/// queued delay.
pub struct DelayedRemote {
    inner: StaticRemote,
    delays: RefCell<VecDeque<u64>>,
}

impl DelayedRemote {
    pub fn new(inner: StaticRemote) -> Self {
        Self {
            inner,
            delays: RefCell::default(),
        }
    }

    pub fn push_delay(&self, millis: u64) {
        self.delays.borrow_mut().push_back(millis);
    }

    async fn hold(&self) {
        let delay = self.delays.borrow_mut().pop_front();
        if let Some(millis) = delay {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

impl RemoteSource for DelayedRemote {
    async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.hold().await;
        self.inner.get_users().await
    }

    async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        self.hold().await;
        self.inner.get_user(id).await
    }

    async fn get_tasks(&self, user_id: Option<u64>) -> Result<Vec<Task>, ApiError> {
        self.hold().await;
        self.inner.get_tasks(user_id).await
    }

    async fn get_posts(&self, user_id: Option<u64>) -> Result<Vec<Post>, ApiError> {
        self.hold().await;
        self.inner.get_posts(user_id).await
    }

    async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        self.hold().await;
        self.inner.get_post(id).await
    }

    async fn get_comments(&self, post_id: Option<u64>) -> Result<Vec<Comment>, ApiError> {
        self.hold().await;
        self.inner.get_comments(post_id).await
    }
}
