/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (SW360 server, session service,
/// console, file system).
pub mod notification_sink;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_repository;
pub mod report_formatter;
pub mod session_provider;

pub use notification_sink::NotificationSink;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_repository::ProjectRepository;
pub use report_formatter::ReportFormatter;
pub use session_provider::{AccessToken, SessionProvider, SessionStatus};
