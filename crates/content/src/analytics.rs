//! Per-platform goals, hashtags, audience targeting, and UTM-tagged
//! tracking links.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;
use zakat_campaign_core::config::CampaignSettings;
use zakat_campaign_core::Platform;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub platforms: Vec<PlatformAnalytics>,
    pub tracking_urls: Vec<TrackingUrl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformAnalytics {
    pub platform: Platform,
    pub metrics: Vec<String>,
    pub goals: Vec<Goal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<AudienceTargeting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target: GoalTarget,
}

/// A goal is either an absolute count or a fractional rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalTarget {
    Count(u64),
    Rate(f64),
}

impl fmt::Display for GoalTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalTarget::Count(n) => write!(f, "{}", n),
            GoalTarget::Rate(r) => write!(f, "{}", r),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceTargeting {
    pub age: String,
    pub location: String,
    pub interests: Vec<String>,
    pub behaviors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingUrl {
    pub platform: Platform,
    pub url: String,
}

impl AnalyticsConfig {
    pub fn platform(&self, platform: Platform) -> Option<&PlatformAnalytics> {
        self.platforms.iter().find(|p| p.platform == platform)
    }

    pub fn tracking_url(&self, platform: Platform) -> Option<&str> {
        self.tracking_urls
            .iter()
            .find(|t| t.platform == platform)
            .map(|t| t.url.as_str())
    }
}

/// Append `utm_source` and `utm_campaign` to `base`, form-encoding the values.
pub fn tracking_url(base: &str, platform: Platform, campaign: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("utm_source", platform.as_str())
        .append_pair("utm_campaign", campaign)
        .finish();
    format!("{}?{}", base, query)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn goal(name: &str, target: GoalTarget) -> Goal {
    Goal {
        name: name.to_string(),
        target,
    }
}

pub fn build_analytics_config(settings: &CampaignSettings) -> AnalyticsConfig {
    let platforms = vec![
        PlatformAnalytics {
            platform: Platform::Instagram,
            metrics: strings(&["reach", "impressions", "engagement_rate", "saves", "shares"]),
            goals: vec![
                goal("reach", GoalTarget::Count(100_000)),
                goal("engagement_rate", GoalTarget::Rate(0.05)),
                goal("app_downloads", GoalTarget::Count(5_000)),
            ],
            hashtags: Some(strings(&[
                "#ZakatKripto",
                "#ZakatDigital",
                "#FintechIslam",
                "#KriptoHalal",
                "#JAKIM",
                "#ZakatMalaysia",
            ])),
            target_audience: None,
        },
        PlatformAnalytics {
            platform: Platform::Facebook,
            metrics: strings(&[
                "video_views",
                "click_through_rate",
                "cost_per_click",
                "conversions",
            ]),
            goals: vec![
                goal("video_views", GoalTarget::Count(500_000)),
                goal("click_through_rate", GoalTarget::Rate(0.02)),
                goal("app_downloads", GoalTarget::Count(8_000)),
            ],
            hashtags: None,
            target_audience: Some(AudienceTargeting {
                age: "25-55".to_string(),
                location: "Malaysia, Singapore, Indonesia, Thailand, Philippines".to_string(),
                interests: strings(&["Islam", "Cryptocurrency", "Finance", "Technology"]),
                behaviors: strings(&["Crypto investors", "Religious practices"]),
            }),
        },
        PlatformAnalytics {
            platform: Platform::Twitter,
            metrics: strings(&["impressions", "retweets", "replies", "link_clicks"]),
            goals: vec![
                goal("thread_views", GoalTarget::Count(50_000)),
                goal("retweets", GoalTarget::Count(1_000)),
                goal("website_visits", GoalTarget::Count(3_000)),
            ],
            hashtags: None,
            target_audience: None,
        },
    ];

    let tracking_urls = Platform::ALL
        .iter()
        .map(|&platform| TrackingUrl {
            platform,
            url: tracking_url(&settings.tracking_base_url, platform, &settings.utm_campaign),
        })
        .collect();

    AnalyticsConfig {
        platforms,
        tracking_urls,
    }
}
