//! The aggregate campaign package and its budget table.

use crate::analytics::AnalyticsConfig;
use crate::carousel::CarouselSlide;
use crate::poster::PosterSpec;
use crate::thread::ThreadTweet;
use crate::video::VideoScript;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recommended spend per platform, as display strings in Malaysian ringgit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTable {
    pub instagram: String,
    pub facebook: String,
    pub twitter: String,
    pub total: String,
}

impl Default for BudgetTable {
    fn default() -> Self {
        Self {
            instagram: "RM 5,000".to_string(),
            facebook: "RM 8,000".to_string(),
            twitter: "RM 2,000".to_string(),
            total: "RM 15,000".to_string(),
        }
    }
}

impl BudgetTable {
    /// `(label, amount)` pairs in report order, total last.
    pub fn lines(&self) -> [(&'static str, &str); 4] {
        [
            ("instagram", self.instagram.as_str()),
            ("facebook", self.facebook.as_str()),
            ("twitter", self.twitter.as_str()),
            ("total", self.total.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignPackage {
    pub instagram_carousel: Vec<CarouselSlide>,
    pub facebook_video_script: VideoScript,
    pub twitter_thread: Vec<ThreadTweet>,
    pub mosque_poster_specs: PosterSpec,
    pub analytics_config: AnalyticsConfig,
    pub created_date: DateTime<Utc>,
    pub campaign_duration: String,
    pub budget_recommendation: BudgetTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_lines() {
        let budget = BudgetTable::default();
        let lines = budget.lines();
        assert_eq!(lines[0], ("instagram", "RM 5,000"));
        assert_eq!(lines[1], ("facebook", "RM 8,000"));
        assert_eq!(lines[2], ("twitter", "RM 2,000"));
        assert_eq!(lines[3], ("total", "RM 15,000"));
    }
}
