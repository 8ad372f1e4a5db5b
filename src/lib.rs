//! sw360-obligations - license obligation reports for SW360 project trees
//!
//! This library loads an SW360 project, walks its transitive linked projects,
//! fetches the license obligations of every project in the tree and
//! aggregates the fulfilled ones into a single report. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`obligation_report`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, the report session and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sw360_obligations::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let repository = Sw360Client::new(
//!     "https://sw360.example.org/resource/api",
//!     Duration::from_secs(30),
//! )?;
//! let progress_reporter = StderrProgressReporter::new();
//! let token_session = StaticTokenSession::new(Some(AccessToken::bearer("token")));
//!
//! // Create the session around the use case
//! let use_case = GenerateObligationReportUseCase::new(repository, progress_reporter);
//! let session = ObligationReportSession::new(use_case, token_session, StderrNotificationSink::new());
//!
//! // Run the report and render it
//! let project_id = ProjectId::new("a1b2c3".to_string())?;
//! if let RefreshOutcome::Completed { .. } = session.activate(project_id).await {
//!     if let Some(report) = session.snapshot().report {
//!         println!("{}", MarkdownFormatter::new().format(&report)?);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod obligation_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrNotificationSink, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::Sw360Client;
    pub use crate::adapters::outbound::session::StaticTokenSession;
    pub use crate::application::dto::{
        ColumnLabels, FetchSummary, ObligationReport, OutputFormat, ReportRequest,
    };
    pub use crate::application::use_cases::{
        GenerateObligationReportUseCase, InertReason, ObligationReportSession, RefreshOutcome,
        ReportSnapshot,
    };
    pub use crate::obligation_report::domain::{
        AggregatedRow, ObligationRecord, ObligationSet, ObligationStatus, Project, ProjectId,
        ProjectNode, ReportMetadata,
    };
    pub use crate::obligation_report::policies::FulfillmentPolicy;
    pub use crate::obligation_report::services::{
        ObligationAggregator, ProjectTreeFlattener,
    };
    pub use crate::ports::outbound::{
        AccessToken, NotificationSink, OutputPresenter, ProgressReporter, ProjectRepository,
        ReportFormatter, SessionProvider, SessionStatus,
    };
    pub use crate::shared::error::{ExitCode, ObligationError};
    pub use crate::shared::Result;
}
