/// Mock implementations for testing
mod mock_notification_sink;
mod mock_progress_reporter;
mod mock_project_repository;
mod mock_session_provider;

pub use mock_notification_sink::MockNotificationSink;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_repository::MockProjectRepository;
pub use mock_session_provider::MockSessionProvider;
