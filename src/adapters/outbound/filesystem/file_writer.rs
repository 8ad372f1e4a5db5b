use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ObligationError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the report to a file
///
/// The parent directory must already exist, and an existing symlink at the
/// target path is never followed.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        ObligationError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    fn validate_parent_directory(&self) -> Result<()> {
        let Some(parent) = self.output_path.parent() else {
            return Ok(());
        };
        if parent == Path::new("") {
            return Ok(());
        }
        if !parent.is_dir() {
            return Err(self.write_error(format!(
                "Parent directory does not exist: {}",
                parent.display()
            )));
        }
        Ok(())
    }

    fn validate_target(&self) -> Result<()> {
        if fs::symlink_metadata(&self.output_path).is_err() {
            // Nothing there yet
            return Ok(());
        }
        validate_not_symlink(&self.output_path, "write").map_err(|e| self.write_error(e.to_string()))
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_target()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        log::info!("Wrote obligation report to {}", self.output_path.display());
        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the report to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| {
                if content.ends_with('\n') {
                    Ok(())
                } else {
                    stdout.write_all(b"\n")
                }
            })
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
