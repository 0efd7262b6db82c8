use dioxus::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

use crate::merge::Loaded;

/// Cut `text` to at most `limit` grapheme clusters, appending `...` when
/// anything was removed.
pub fn truncate(text: &str, limit: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(limit).collect();
    if graphemes.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Entity-encode `text` for use inside a double-quoted attribute value.
/// `dioxus-ssr` escapes text nodes only.
pub(super) fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub(super) fn banners(loaded: &Loaded) -> Element {
    let network = loaded.network_failed();
    rsx! {
        if network {
            div { class: "message message-warning",
                "Could not reach the remote service. Showing local data only."
            }
        }
        {loaded.storage_problems().map(|problem| {
            let problem = problem.to_string();
            rsx! {
                div { class: "message message-warning", "Local data could not be read: {problem}" }
            }
        })}
    }
}

pub(super) fn empty(text: &str) -> Element {
    let text = text.to_string();
    rsx! {
        div { class: "message message-info", "{text}" }
    }
}

pub(super) fn local_badge() -> Element {
    rsx! {
        span { class: "badge badge-local", "(Local)" }
    }
}
