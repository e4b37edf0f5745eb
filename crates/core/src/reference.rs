//! Static reference data: the ASEAN country table, the brand palette, and
//! the social platforms the campaign runs on.

use crate::error::{CampaignError, CampaignResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Local currency and nisab threshold for one ASEAN market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryProfile {
    pub currency_code: String,
    pub display_name: String,
    pub flag: String,
    /// Nisab in the local currency's whole units.
    pub nisab: u64,
}

impl CountryProfile {
    fn new(currency_code: &str, display_name: &str, flag: &str, nisab: u64) -> Self {
        Self {
            currency_code: currency_code.to_string(),
            display_name: display_name.to_string(),
            flag: flag.to_string(),
            nisab,
        }
    }
}

/// The five markets covered by the campaign, in publication order.
pub fn country_profiles() -> Vec<CountryProfile> {
    vec![
        CountryProfile::new("MYR", "Malaysia", "🇲🇾", 21_500),
        CountryProfile::new("SGD", "Singapore", "🇸🇬", 7_225),
        CountryProfile::new("IDR", "Indonesia", "🇮🇩", 14_500_000),
        CountryProfile::new("THB", "Thailand", "🇹🇭", 54_000),
        CountryProfile::new("PHP", "Philippines", "🇵🇭", 128_000),
    ]
}

/// Brand colors as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub light: String,
    pub dark: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#006633".to_string(),
            secondary: "#FFD700".to_string(),
            accent: "#8E1600".to_string(),
            light: "#f8f9fa".to_string(),
            dark: "#343a40".to_string(),
        }
    }
}

impl ColorPalette {
    /// Named entries in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("light", self.light.as_str()),
            ("dark", self.dark.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Facebook, Platform::Twitter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Check the static tables are complete: every country carries all four
/// fields with a positive nisab, and every palette entry is a `#rrggbb` color.
pub fn validate_reference_data(
    countries: &[CountryProfile],
    palette: &ColorPalette,
) -> CampaignResult<()> {
    for country in countries {
        if country.currency_code.is_empty()
            || country.display_name.is_empty()
            || country.flag.is_empty()
        {
            return Err(CampaignError::Validation(format!(
                "country profile '{}' has an empty field",
                country.currency_code
            )));
        }
        if country.nisab == 0 {
            return Err(CampaignError::Validation(format!(
                "country profile '{}' has a zero nisab",
                country.currency_code
            )));
        }
    }

    for (name, value) in palette.entries() {
        if !is_hex_color(value) {
            return Err(CampaignError::Validation(format!(
                "palette color '{}' is not a hex color: {}",
                name, value
            )));
        }
    }

    debug!(countries = countries.len(), "Reference data validated");
    Ok(())
}
