/// Domain layer for obligation reports
///
/// Pure business logic: project trees, obligation records and the rules
/// that decide which obligations make it into a report. No I/O lives here.
pub mod domain;
pub mod policies;
pub mod services;
