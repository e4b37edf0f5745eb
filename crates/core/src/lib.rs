//! Shared foundation for the zakat campaign generator: configuration,
//! the error type, and the static reference data every artifact draws on.

pub mod config;
pub mod error;
pub mod reference;

pub use config::AppConfig;
pub use error::{CampaignError, CampaignResult};
pub use reference::{ColorPalette, CountryProfile, Platform};
