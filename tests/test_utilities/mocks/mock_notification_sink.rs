use std::sync::{Arc, Mutex};
use sw360_obligations::prelude::*;

/// Mock NotificationSink for testing that captures notifications
#[derive(Default, Clone)]
pub struct MockNotificationSink {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl NotificationSink for MockNotificationSink {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
