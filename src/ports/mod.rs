/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven ports live here: the CLI drives the application through
/// the report session directly.
pub mod outbound;
