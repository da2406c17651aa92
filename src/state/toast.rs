//! Transient notification queue.
//!
//! Every submission outcome (validation failure, remote success, remote
//! rejection) pushes exactly one toast. The queue is plain data; the
//! auto-dismiss timer lives in `components::toast_stack`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// One on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Ordered queue of live toasts. Ids are stable and never reused within a
/// page load, so a late dismiss timer can only remove its own toast.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id (for targeted dismissal).
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Live toasts, oldest first.
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}
