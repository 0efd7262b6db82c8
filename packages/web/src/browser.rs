//! # Browser shell — the core wired to the live page
//!
//! [`WebShell`] implements [`Shell`] over the fixed element ids rendered by the
//! `App` component:
//!
//! | Id | Role |
//! |----|------|
//! | `content` | View fragments |
//! | `breadcrumbs` | Crumb trail |
//! | `search-input` | Free-text filter; every keystroke re-runs the route |
//! | `modal`, `modal-title`, `modal-body`, `modal-close` | Forms, confirmations, post details |
//! | `notifications` | Toasts, removed after `notifications.duration_ms` |
//!
//! Click listeners attached by the binder are owned per mount point and
//! dropped on the next mount, together with the nodes they were bound to.
//! Forms and confirmations resolve through oneshot channels, so the
//! controller awaits them instead of blocking the page.

use std::cell::RefCell;
use std::rc::Rc;

use api::HttpRemote;
use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;
use store::{ClientConfig, LocalStorageStore, PersistentStore};
use ui::render;
use ui::{Action, App, FormFields, FragmentRoot, Notice, Shell, View};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement, NodeList,
    Window,
};

type Listener = Closure<dyn FnMut(Event)>;
type Listeners = Rc<RefCell<Vec<Listener>>>;
type Dispatch = Rc<dyn Fn(Action)>;
type DispatchSlot = Rc<RefCell<Option<Dispatch>>>;

type WebApp = App<HttpRemote, LocalStorageStore, WebShell>;

/// Build the controller and hook it to the page.
pub fn boot(config: ClientConfig) {
    let Some(window) = web_sys::window() else {
        tracing::error!("No window; cannot start");
        return;
    };
    let Some(shell) = WebShell::new(window.clone(), config.notifications.duration_ms) else {
        tracing::error!("Page chrome missing; cannot start");
        return;
    };
    let slot = shell.dispatch.clone();
    let search = shell.document.get_element_by_id("search-input");

    let store = PersistentStore::with_prefix(LocalStorageStore::new(), &config.storage.key_prefix);
    let remote = HttpRemote::new(&config.remote.base_url);
    tracing::info!("Starting against {}", remote.base_url());
    let app: Rc<WebApp> = Rc::new(App::new(remote, store, shell, config));

    let weak = Rc::downgrade(&app);
    slot.replace(Some(Rc::new(move |action: Action| {
        if let Some(app) = weak.upgrade() {
            spawn_local(async move { app.dispatch(action).await });
        }
    })));

    let on_hash = app.clone();
    listen(&window, "hashchange", move |_| {
        let app = on_hash.clone();
        spawn_local(async move {
            let location = app.shell().location();
            app.handle_route_change(&location).await;
        });
    });

    if let Some(search) = search {
        let on_search = app.clone();
        listen(&search, "input", move |_| {
            let app = on_search.clone();
            spawn_local(async move {
                app.refresh().await;
            });
        });
    }

    spawn_local(async move {
        app.start().await;
    });
}

/// Listener that lives as long as the page.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Listener::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        tracing::warn!("Listening for {event}: {e:?}");
    }
    closure.forget();
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn read_form(form: &Element) -> FormFields {
    let mut fields = FormFields::new();
    let Ok(list) = form.query_selector_all("input[name], textarea[name]") else {
        return fields;
    };
    for element in elements(&list) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            let value = if input.type_() == "checkbox" {
                if input.checked() { "true".to_string() } else { String::new() }
            } else {
                input.value()
            };
            fields.insert(&input.name(), &value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            fields.insert(&area.name(), &area.value());
        }
    }
    fields
}

pub struct WebShell {
    window: Window,
    document: Document,
    dispatch: DispatchSlot,
    content_listeners: Listeners,
    crumb_listeners: Listeners,
    modal_listeners: Listeners,
    pending_form: Rc<RefCell<Option<oneshot::Sender<Option<FormFields>>>>>,
    pending_confirm: Rc<RefCell<Option<oneshot::Sender<bool>>>>,
    toast_ms: u32,
}

impl WebShell {
    fn new(window: Window, toast_ms: u32) -> Option<Self> {
        let document = window.document()?;
        let shell = Self {
            window,
            document,
            dispatch: Rc::default(),
            content_listeners: Rc::default(),
            crumb_listeners: Rc::default(),
            modal_listeners: Rc::default(),
            pending_form: Rc::default(),
            pending_confirm: Rc::default(),
            toast_ms,
        };

        let modal = shell.document.get_element_by_id("modal")?;
        let close = shell.document.get_element_by_id("modal-close")?;
        let pending_form = shell.pending_form.clone();
        let pending_confirm = shell.pending_confirm.clone();
        listen(&close, "click", move |event| {
            event.prevent_default();
            let _ = modal.class_list().add_1("hidden");
            cancel_pending(&pending_form, &pending_confirm);
        });

        Some(shell)
    }

    fn mount(&self, id: &str, html: &str, listeners: &Listeners) -> Option<WebRoot> {
        let Some(root) = self.document.get_element_by_id(id) else {
            tracing::warn!("Mount point #{id} missing");
            return None;
        };
        listeners.borrow_mut().clear();
        root.set_inner_html(html);
        Some(WebRoot {
            root,
            dispatch: self.dispatch.clone(),
            listeners: listeners.clone(),
        })
    }

    fn modal_shows(&self, title: &str) -> bool {
        let visible = self
            .document
            .get_element_by_id("modal")
            .is_some_and(|m| !m.class_list().contains("hidden"));
        let same_title = self
            .document
            .get_element_by_id("modal-title")
            .and_then(|t| t.text_content())
            .is_some_and(|t| t == title);
        visible && same_title && self.document.get_element_by_id("modal-form").is_some()
    }

    fn wire_form(&self, root: &WebRoot) {
        let Ok(Some(form)) = root.root.query_selector("#modal-form") else {
            tracing::warn!("Modal body has no #modal-form");
            return;
        };
        let pending = self.pending_form.clone();
        let source = form.clone();
        root.on(&form, "submit", move |event| {
            event.prevent_default();
            let fields = read_form(&source);
            let sender = pending.borrow_mut().take();
            if let Some(sender) = sender {
                let _ = sender.send(Some(fields));
            }
        });
    }
}

fn cancel_pending(
    form: &RefCell<Option<oneshot::Sender<Option<FormFields>>>>,
    confirm: &RefCell<Option<oneshot::Sender<bool>>>,
) {
    let form = form.borrow_mut().take();
    if let Some(sender) = form {
        let _ = sender.send(None);
    }
    let confirm = confirm.borrow_mut().take();
    if let Some(sender) = confirm {
        let _ = sender.send(false);
    }
}

impl Shell for WebShell {
    type Root = WebRoot;

    fn location(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn set_location(&self, hash: &str) {
        if let Err(e) = self.window.location().set_hash(hash) {
            tracing::warn!("Setting location {hash}: {e:?}");
        }
    }

    fn search_query(&self) -> String {
        self.document
            .get_element_by_id("search-input")
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn mount_content(&self, html: &str) -> Option<WebRoot> {
        self.mount("content", html, &self.content_listeners)
    }

    fn mount_breadcrumbs(&self, html: &str) -> Option<WebRoot> {
        self.mount("breadcrumbs", html, &self.crumb_listeners)
    }

    fn set_active_view(&self, view: View) {
        let wanted = view.label().to_ascii_lowercase();
        let Ok(list) = self.document.query_selector_all(".nav-link[data-view]") else {
            return;
        };
        for link in elements(&list) {
            let active = link.get_attribute("data-view").as_deref() == Some(wanted.as_str());
            let _ = link.class_list().toggle_with_force("active", active);
        }
    }

    fn open_modal(&self, title: &str, html: &str) -> Option<WebRoot> {
        let modal = self.document.get_element_by_id("modal")?;
        if let Some(heading) = self.document.get_element_by_id("modal-title") {
            heading.set_text_content(Some(title));
        }
        let root = self.mount("modal-body", html, &self.modal_listeners)?;
        let _ = modal.class_list().remove_1("hidden");
        Some(root)
    }

    fn close_modal(&self) {
        if let Some(modal) = self.document.get_element_by_id("modal") {
            let _ = modal.class_list().add_1("hidden");
        }
        if let Some(body) = self.document.get_element_by_id("modal-body") {
            body.set_inner_html("");
        }
        self.modal_listeners.borrow_mut().clear();
        cancel_pending(&self.pending_form, &self.pending_confirm);
    }

    async fn prompt(&self, title: &str, form_html: &str) -> Option<FormFields> {
        if !self.modal_shows(title) {
            let root = self.open_modal(title, form_html)?;
            self.wire_form(&root);
        }
        let (sender, receiver) = oneshot::channel();
        let previous = self.pending_form.replace(Some(sender));
        if let Some(previous) = previous {
            let _ = previous.send(None);
        }
        receiver.await.ok().flatten()
    }

    async fn confirm(&self, message: &str) -> bool {
        let Some(root) = self.open_modal("Please confirm", &render::confirm_dialog(message)) else {
            return false;
        };
        let (sender, receiver) = oneshot::channel();
        self.pending_confirm.replace(Some(sender));
        for (id, answer) in [("#confirm-yes", true), ("#confirm-no", false)] {
            let Ok(Some(button)) = root.root.query_selector(id) else {
                continue;
            };
            let pending = self.pending_confirm.clone();
            root.on(&button, "click", move |event| {
                event.prevent_default();
                let sender = pending.borrow_mut().take();
                if let Some(sender) = sender {
                    let _ = sender.send(answer);
                }
            });
        }
        let answer = receiver.await.unwrap_or(false);
        self.close_modal();
        answer
    }

    fn notify(&self, notice: &Notice) {
        let Some(area) = self.document.get_element_by_id("notifications") else {
            return;
        };
        let Ok(toast) = self.document.create_element("div") else {
            return;
        };
        toast.set_class_name(&format!("notification {}", notice.level.css_class()));
        toast.set_text_content(Some(&notice.message));
        if area.append_child(&toast).is_err() {
            return;
        }
        let delay = self.toast_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            toast.remove();
        });
    }
}

/// A mounted fragment; listeners attached here live until the next mount.
pub struct WebRoot {
    root: Element,
    dispatch: DispatchSlot,
    listeners: Listeners,
}

impl WebRoot {
    fn on(&self, node: &Element, event: &str, handler: impl FnMut(Event) + 'static) {
        let listener = Listener::new(handler);
        match node.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
            Ok(()) => self.listeners.borrow_mut().push(listener),
            Err(e) => tracing::warn!("Binding {event}: {e:?}"),
        }
    }
}

impl FragmentRoot for WebRoot {
    type Node = Element;

    fn select_all(&self, selector: &str) -> Vec<Element> {
        match self.root.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                tracing::warn!("Bad selector {selector}: {e:?}");
                Vec::new()
            }
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn attach(&self, node: &Element, action: Action) {
        let slot = self.dispatch.clone();
        self.on(node, "click", move |event| {
            event.prevent_default();
            let dispatch = slot.borrow().clone();
            match dispatch {
                Some(dispatch) => dispatch(action.clone()),
                None => tracing::warn!("Click before the controller was ready"),
            }
        });
    }
}
