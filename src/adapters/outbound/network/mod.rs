/// Network adapters for the SW360 REST API
mod hal;
mod sw360_client;

pub use sw360_client::{Sw360Client, DEFAULT_TIMEOUT_SECS};
