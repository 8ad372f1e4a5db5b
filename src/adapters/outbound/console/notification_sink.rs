use crate::ports::outbound::NotificationSink;
use owo_colors::{OwoColorize, Stream};

/// StderrNotificationSink adapter for user-visible failure messages
///
/// Colors are only applied when stderr is a terminal.
pub struct StderrNotificationSink;

impl StderrNotificationSink {
    pub fn new() -> Self {
        Self
    }

    fn render(message: &str) -> String {
        format!(
            "{} {}",
            "❌ Error:".if_supports_color(Stream::Stderr, |text| text.red()),
            message
        )
    }
}

impl Default for StderrNotificationSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for StderrNotificationSink {
    fn notify_error(&self, message: &str) {
        eprintln!();
        eprintln!("{}", Self::render(message));
    }
}
