/// Console adapters writing to stderr
mod notification_sink;
mod progress_reporter;

pub use notification_sink::StderrNotificationSink;
pub use progress_reporter::StderrProgressReporter;
