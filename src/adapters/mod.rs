/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with SW360, the console and the filesystem.
pub mod outbound;
