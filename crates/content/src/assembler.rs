//! Content package assembler. Owns the country table, the palette, and the
//! campaign settings, and builds each artifact fresh on every call.

use crate::analytics::{build_analytics_config, AnalyticsConfig};
use crate::carousel::{build_carousel, CarouselSlide};
use crate::package::{BudgetTable, CampaignPackage};
use crate::poster::{build_poster_spec, PosterSpec};
use crate::thread::{build_thread, ThreadTweet};
use crate::video::{build_video_script, VideoScript};
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use zakat_campaign_core::config::CampaignSettings;
use zakat_campaign_core::reference::{country_profiles, validate_reference_data};
use zakat_campaign_core::{CampaignResult, ColorPalette, CountryProfile};

pub struct ContentPackageAssembler {
    countries: Vec<CountryProfile>,
    palette: ColorPalette,
    settings: CampaignSettings,
}

impl ContentPackageAssembler {
    pub fn new(settings: &CampaignSettings) -> Self {
        Self {
            countries: country_profiles(),
            palette: ColorPalette::default(),
            settings: settings.clone(),
        }
    }

    pub fn list_country_profiles(&self) -> &[CountryProfile] {
        &self.countries
    }

    /// Look up a market by ISO currency code, ignoring case.
    pub fn country_profile(&self, currency_code: &str) -> Option<&CountryProfile> {
        self.countries
            .iter()
            .find(|c| c.currency_code.eq_ignore_ascii_case(currency_code))
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn validate(&self) -> CampaignResult<()> {
        validate_reference_data(&self.countries, &self.palette)
    }

    pub fn build_carousel(&self) -> Vec<CarouselSlide> {
        let slides = build_carousel(&self.countries);
        debug!(slides = slides.len(), "Built Instagram carousel");
        slides
    }

    pub fn build_video_script(&self) -> VideoScript {
        let script = build_video_script();
        debug!(
            scenes = script.scenes.len(),
            duration = script.duration,
            "Built Facebook video script"
        );
        script
    }

    pub fn build_thread(&self) -> Vec<ThreadTweet> {
        let thread = build_thread();
        debug!(tweets = thread.len(), "Built Twitter thread");
        thread
    }

    pub fn build_poster_spec(&self) -> PosterSpec {
        let poster = build_poster_spec(&self.palette);
        debug!(size = %poster.size, "Built mosque poster spec");
        poster
    }

    pub fn build_analytics_config(&self) -> AnalyticsConfig {
        let config = build_analytics_config(&self.settings);
        debug!(
            platforms = config.platforms.len(),
            utm_campaign = %self.settings.utm_campaign,
            "Built analytics config"
        );
        config
    }

    /// Assemble every artifact, stamped with the current time.
    pub fn export_package(&self) -> CampaignPackage {
        self.export_package_at(Utc::now())
    }

    /// Assemble every artifact with a caller-supplied timestamp.
    pub fn export_package_at(&self, created_date: DateTime<Utc>) -> CampaignPackage {
        let package = CampaignPackage {
            instagram_carousel: self.build_carousel(),
            facebook_video_script: self.build_video_script(),
            twitter_thread: self.build_thread(),
            mosque_poster_specs: self.build_poster_spec(),
            analytics_config: self.build_analytics_config(),
            created_date,
            campaign_duration: self.settings.duration.clone(),
            budget_recommendation: BudgetTable::default(),
        };

        info!(
            created_date = %package.created_date.to_rfc3339(),
            duration = %package.campaign_duration,
            "Campaign package exported"
        );
        package
    }
}

impl Default for ContentPackageAssembler {
    fn default() -> Self {
        Self::new(&CampaignSettings::default())
    }
}
