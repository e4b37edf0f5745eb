//! Report renderers: the sectioned plain-text summary and full JSON.

use crate::package::CampaignPackage;
use std::io::Write;
use zakat_campaign_core::CampaignResult;

/// Tweet bodies longer than this are cut in the text report.
const TWEET_PREVIEW_CHARS: usize = 100;

fn preview(content: &str) -> String {
    content.chars().take(TWEET_PREVIEW_CHARS).collect()
}

/// Write the human-readable report.
pub fn write_text<W: Write>(package: &CampaignPackage, out: &mut W) -> CampaignResult<()> {
    writeln!(out, "=== ZAKAT CALCULATOR ASEAN - SOCIAL MEDIA CAMPAIGN PACKAGE ===")?;
    writeln!(out)?;

    writeln!(out, "📱 INSTAGRAM CAROUSEL:")?;
    for (i, slide) in package.instagram_carousel.iter().enumerate() {
        writeln!(out, "Slide {}: {}", i + 1, slide.title)?;
        for step in slide.steps.iter().flatten() {
            writeln!(out, "  • {}", step)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "🎥 FACEBOOK VIDEO SCRIPT:")?;
    for scene in &package.facebook_video_script.scenes {
        writeln!(out, "{}: {}", scene.time, scene.visual)?;
        if let Some(overlay) = &scene.text_overlay {
            writeln!(out, "  Text: {}", overlay)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "🐦 TWITTER THREAD:")?;
    for tweet in &package.twitter_thread {
        writeln!(out, "Tweet {}: {}...", tweet.tweet, preview(&tweet.content))?;
        writeln!(out)?;
    }

    let poster = &package.mosque_poster_specs;
    writeln!(out, "🏛️ MOSQUE POSTER SPECIFICATIONS:")?;
    writeln!(out, "Size: {}", poster.size)?;
    writeln!(out, "Header: {}", poster.design_elements.header.text)?;
    writeln!(out, "QR Code: {}", poster.design_elements.qr_code.label)?;
    writeln!(out)?;

    writeln!(out, "📊 CAMPAIGN ANALYTICS GOALS:")?;
    for platform in &package.analytics_config.platforms {
        writeln!(out, "{}:", platform.platform.as_str().to_uppercase())?;
        for goal in &platform.goals {
            writeln!(out, "  • {}: {}", goal.name, goal.target)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "💰 BUDGET RECOMMENDATION:")?;
    for (label, amount) in package.budget_recommendation.lines() {
        writeln!(out, "  • {}: {}", label, amount)?;
    }

    writeln!(out)?;
    writeln!(out, "📅 Campaign Duration: {}", package.campaign_duration)?;
    writeln!(out, "✅ Campaign package generated successfully!")?;
    Ok(())
}

/// Serialize the whole package as pretty-printed JSON.
pub fn to_json(package: &CampaignPackage) -> CampaignResult<String> {
    Ok(serde_json::to_string_pretty(package)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::ContentPackageAssembler;

    fn render() -> String {
        let package = ContentPackageAssembler::default().export_package();
        let mut buf = Vec::new();
        write_text(&package, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let body = "🧵".repeat(150);
        assert_eq!(preview(&body).chars().count(), 100);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_sections_in_order() {
        let text = render();
        let headers = [
            "📱 INSTAGRAM CAROUSEL:",
            "🎥 FACEBOOK VIDEO SCRIPT:",
            "🐦 TWITTER THREAD:",
            "🏛️ MOSQUE POSTER SPECIFICATIONS:",
            "📊 CAMPAIGN ANALYTICS GOALS:",
            "💰 BUDGET RECOMMENDATION:",
        ];
        let positions: Vec<usize> = headers
            .iter()
            .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {}", h)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.ends_with("✅ Campaign package generated successfully!\n"));
    }

    #[test]
    fn test_report_lines() {
        let text = render();
        assert!(text.contains("Slide 1: Zakat Kripto: Kewajipan Baru Umat Islam Digital\n"));
        assert!(text.contains("  • 2. Tolak hutang dari jumlah aset\n"));
        assert!(text.contains("12-18s: App demo: Calculator interface with MYR input\n  Text: Nisab Malaysia: RM 21,500\n"));
        assert!(text.contains("INSTAGRAM:\n  • reach: 100000\n  • engagement_rate: 0.05\n"));
        assert!(text.contains("  • total: RM 15,000\n"));
        assert!(text.contains("📅 Campaign Duration: 30 days\n"));
        assert!(text.contains("QR Code: Imbas untuk Kalkulator Digital\n"));
    }

    #[test]
    fn test_opening_scene_has_no_text_line() {
        let text = render();
        assert!(text.contains(
            "0-3s: Animation: Gold bars transforming into cryptocurrency coins\n\n3-6s:"
        ));
    }

    #[test]
    fn test_tweets_are_truncated() {
        let package = ContentPackageAssembler::default().export_package();
        let text = render();
        for tweet in &package.twitter_thread {
            assert!(tweet.content.chars().count() > TWEET_PREVIEW_CHARS);
            let expected = format!("Tweet {}: {}...\n\n", tweet.tweet, preview(&tweet.content));
            assert!(text.contains(&expected), "tweet {}", tweet.tweet);
            assert!(!text.contains(&tweet.content));
        }
    }

    #[test]
    fn test_json_round_trips() {
        let package = ContentPackageAssembler::default().export_package();
        let json = to_json(&package).unwrap();
        let parsed: CampaignPackage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, package);
    }
}
