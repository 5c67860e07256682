//! Shared context passed to modules
#![allow(dead_code)]

/// Currently selected item in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selected {
    None,
    Patient(u32),
    Template(u32),
}

/// Shared context available to all modules
#[derive(Debug)]
pub struct Context {
    /// Currently selected item
    pub selected: Selected,

    /// Clipboard content for copy/paste between tabs
    pub clipboard: Option<String>,

    /// Product name stamped into outbound payloads
    pub product_name: String,

    /// Whether a webhook test is currently in flight
    pub webhook_in_flight: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            selected: Selected::None,
            clipboard: None,
            product_name: String::new(),
            webhook_in_flight: false,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clipboard content
    pub fn set_clipboard(&mut self, content: String) {
        self.clipboard = Some(content);
    }

    /// Get clipboard content
    pub fn get_clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }
}
