use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{ImportOutput, Message, Severity};

#[derive(Clone, Default)]
pub struct MockImportOutput {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MockImportOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::replace(&mut *self.messages.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.read().iter().any(|m| m == message)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.messages
            .read()
            .iter()
            .filter(|m| m.severity() == severity)
            .count()
    }
}

impl ImportOutput for MockImportOutput {
    fn say(&self, message: &Message) {
        self.messages.write().push(message.clone());
    }
}
