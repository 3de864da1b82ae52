pub mod config;
pub mod contacts;
pub mod models;

pub use config::{ApiConfig, DashboardConfig, MapConfig};
pub use contacts::{ContactStore, StoreError};
pub use models::{Contact, ContactDraft, ContactId, ContactStatus, ParseStatusError};
