use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// an authentication problem, bad input and a failed report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated successfully
    Success = 0,
    /// No usable credential was available for the SW360 server
    AuthenticationRequired = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
    /// The run was interrupted before it finished
    Cancelled = 130,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AuthenticationRequired => write!(f, "Authentication Required (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::Cancelled => write!(f, "Cancelled (130)"),
        }
    }
}

/// Application-specific errors for obligation report generation.
///
/// Uses thiserror to derive Display and Error traits. Layers pass these
/// around inside `anyhow::Error`; callers that need to react to a specific
/// kind use `downcast_ref::<ObligationError>()`.
#[derive(Debug, Error)]
pub enum ObligationError {
    #[error("Invalid project id: '{id}'\nReason: {reason}\n\n💡 Hint: Use the project id shown in the SW360 project URL")]
    InvalidProjectId { id: String, reason: String },

    #[error("Malformed linked-project tree: project '{project_id}' links back to one of its own ancestors\n\n💡 Hint: Check the project's linked projects in SW360 for a cycle")]
    MalformedTree { project_id: String },

    #[error("Failed to fetch project '{project_id}'\nDetails: {details}\n\n💡 Hint: Please verify the project id, the server URL and your network connection")]
    ProjectFetchError { project_id: String, details: String },

    #[error("Failed to fetch linked projects of '{project_id}'\nDetails: {details}\n\n💡 Hint: Please verify that your token may read the project's linked projects")]
    LinkedProjectsFetchError { project_id: String, details: String },

    #[error("Authentication required: no access token is available\n\n💡 Hint: Pass --token, set SW360_TOKEN or add 'token' to the config file")]
    AuthenticationRequired,

    #[error("The session is still being established")]
    SessionLoading,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {details}\n\n💡 Hint: {hint}")]
    ConfigError { details: String, hint: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ObligationError {
    /// Returns true when the given error chain is a cancellation.
    pub fn is_cancellation(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<ObligationError>(),
            Some(ObligationError::Cancelled)
        )
    }
}
