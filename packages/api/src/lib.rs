//! # API crate: read-only client for the disease.sh statistics API
//!
//! The dashboard has no backend of its own. Its two data views each issue a
//! single GET against a fixed third-party endpoint and render the JSON as-is.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`StatsClient`]: URL construction and the two fetches |
//! | [`models`] | Wire types: [`Country`] and the order-preserving [`CasesTimeline`] |
//! | [`error`] | [`FetchError`]: transport, status, and decode failures |
//!
//! ## Endpoints
//!
//! - `GET {base}/historical/all?lastdays={lastdays}` → [`CasesTimeline`]
//! - `GET {base}/countries` → `Vec<`[`Country`]`>`
//!
//! The base URL and `lastdays` selector come from [`store::ApiConfig`].

pub mod client;
pub mod error;
pub mod models;

pub use client::StatsClient;
pub use error::FetchError;
pub use models::{CasesTimeline, Country, CountryInfo, TimelinePoint};
