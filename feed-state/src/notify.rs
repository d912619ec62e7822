use log::info;
use std::cell::RefCell;

/// Fire-and-forget notification sink backing the toast/confirmation UI.
/// Calls carry a short title and description, return nothing, and expose
/// no failure mode to the caller.
pub trait Notify {
    fn notify(&self, title: &str, description: &str);
}

/// Writes notifications through the `log` facade.
pub struct LogNotify;

impl Notify for LogNotify {
    fn notify(&self, title: &str, description: &str) {
        info!("{}: {}", title, description);
    }
}

/// Swallows notifications.
pub struct NullNotify;

impl Notify for NullNotify {
    fn notify(&self, _title: &str, _description: &str) {}
}

/// Records notifications in memory so tests can assert on them.
#[derive(Default)]
pub struct MemoryNotify {
    toasts: RefCell<Vec<(String, String)>>,
}

impl MemoryNotify {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<(String, String)> {
        self.toasts.borrow().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.toasts
            .borrow()
            .iter()
            .map(|(title, _)| title.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }
}

impl Notify for MemoryNotify {
    fn notify(&self, title: &str, description: &str) {
        self.toasts
            .borrow_mut()
            .push((title.to_string(), description.to_string()));
    }
}

/// Clipboard collaborator for the "copy post text" action. The caller only
/// reports success or failure through the notification sink.
pub trait Clipboard {
    fn write(&self, text: &str) -> bool;
}

/// In-memory clipboard, always succeeds.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: RefCell<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&self, text: &str) -> bool {
        *self.contents.borrow_mut() = Some(text.to_string());
        true
    }
}
