// Announcement domain model
use serde::Serialize;

/// Ordered announcement messages. Only the first one is ever shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Announcements {
    messages: Vec<String>,
}

impl Announcements {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn current(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }
}
