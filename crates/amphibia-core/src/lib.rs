//! Remote list loader between `amphibia-api` and presentation layers.
//!
//! - **[`ListLoader`]**: owns the observable [`LoadState`]
//!   (`Loading` / `Success` / `Error`), starts a fetch on construction and
//!   on every [`load()`](ListLoader::load) / [`retry()`](ListLoader::retry).
//!   Overlapping loads are not guarded: the last one to complete wins.
//!
//! - **[`Source`]**: the transport seam the loader is built on.
//!   [`HttpSource`] is the production implementation over
//!   [`amphibia_api::AmphibiansClient`]; tests plug in scripted sources.
//!
//! - **[`StateStream`]**: subscription handle exposing `current()` /
//!   `latest()` / `changed()` / `settled()` for reactive rendering.
//!
//! - **Domain model** ([`model`]): [`Amphibian`], converted from the wire
//!   record in [`convert`].

pub mod config;
pub mod convert;
pub mod error;
pub mod loader;
pub mod model;
pub mod source;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use amphibia_api::FailureKind;
pub use config::{SourceConfig, TlsVerification};
pub use error::CoreError;
pub use loader::{ListLoader, LoadState};
pub use model::Amphibian;
pub use source::{HttpSource, Source};
pub use stream::StateStream;
