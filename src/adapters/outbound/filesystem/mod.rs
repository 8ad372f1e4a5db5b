/// Filesystem and stdout adapters for presenting the report
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
