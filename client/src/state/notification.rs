//! Toast notifications shown in the top-right corner.
//!
//! A notification is pushed hidden, revealed a moment later so its slide-in
//! transition runs, dismissed (by its close button or by timeout), and
//! removed once the exit transition has finished.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notification-success",
            Self::Error => "notification-error",
            Self::Info => "notification-info",
        }
    }

    /// Font Awesome icon shown next to the message.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error | Self::Info => "fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Carries the `.show` class.
    pub visible: bool,
    pub dismissed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn is_visible(&self, id: u64) -> bool {
        self.get(id).is_some_and(|n| n.visible)
    }

    /// Append a hidden notification and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification { id, message: message.into(), severity, visible: false, dismissed: false });
        id
    }

    /// Start the slide-in. Ignored once the notification is dismissed.
    pub fn reveal(&mut self, id: u64) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id && !n.dismissed) {
            n.visible = true;
        }
    }

    /// Start the exit transition. Returns `true` only for the call that
    /// actually dismissed it, so the caller schedules removal once.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.dismissed => {
                n.dismissed = true;
                n.visible = false;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
