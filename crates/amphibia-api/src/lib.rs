// amphibia-api: Async Rust client for the amphibians JSON endpoint

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{AMPHIBIANS_PATH, AmphibiansClient, DEFAULT_BASE_URL};
pub use error::{Error, FailureKind};
pub use models::AmphibianRecord;
pub use transport::{TlsMode, TransportConfig};
