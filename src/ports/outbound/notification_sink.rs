/// NotificationSink port for user-visible failure messages
///
/// A report run sends at most one message here, and only for failures that
/// end the run. Per-project problems and cancellations never reach it.
pub trait NotificationSink {
    /// Shows a single human-readable error message
    fn notify_error(&self, message: &str);
}
