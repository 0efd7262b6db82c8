//! Transient notices and the activity log behind them.
//!
//! Every notice the controller raises is appended to an [`ActivityLog`] and
//! handed to the shell, which shows it briefly.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// CSS modifier used by the shell's toast markup.
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notification-info",
            NoticeLevel::Success => "notification-success",
            NoticeLevel::Warning => "notification-warning",
            NoticeLevel::Error => "notification-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: current_time(),
            level,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: Vec<Notice>,
}

impl ActivityLog {
    pub fn push(&mut self, notice: Notice) {
        self.entries.push(notice);
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Notice> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
