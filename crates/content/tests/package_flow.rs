//! End-to-end: assemble a package, render it both ways, and check the
//! published campaign values survive.

use zakat_campaign_content::{to_json, write_text, ContentPackageAssembler};
use zakat_campaign_core::config::CampaignSettings;
use zakat_campaign_core::Platform;

#[test]
fn test_default_campaign_end_to_end() {
    let assembler = ContentPackageAssembler::new(&CampaignSettings::default());
    assembler.validate().unwrap();

    let package = assembler.export_package();

    let mut buf = Vec::new();
    write_text(&package, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("=== ZAKAT CALCULATOR ASEAN - SOCIAL MEDIA CAMPAIGN PACKAGE ===\n\n"));
    assert!(text.contains("Slide 5: Kira Sekarang\n"));
    assert!(text.contains("TWITTER:\n  • thread_views: 50000\n"));

    let json: serde_json::Value = serde_json::from_str(&to_json(&package).unwrap()).unwrap();
    assert_eq!(json["campaign_duration"], "30 days");
    assert_eq!(json["budget_recommendation"]["facebook"], "RM 8,000");
    assert_eq!(json["instagram_carousel"][2]["data"][0]["currency_code"], "MYR");
    assert_eq!(json["instagram_carousel"][2]["data"][0]["nisab"], 21500);
    assert_eq!(json["analytics_config"]["platforms"][0]["goals"][1]["target"], 0.05);
    assert_eq!(
        json["analytics_config"]["tracking_urls"][0]["url"],
        "zakatcalculator.asean?utm_source=instagram&utm_campaign=zakat2024"
    );
}

#[test]
fn test_repeated_exports_differ_only_in_timestamp() {
    let assembler = ContentPackageAssembler::default();
    let first = assembler.export_package();
    let second = assembler.export_package();
    assert!(second.created_date >= first.created_date);

    let mut a = serde_json::to_value(&first).unwrap();
    let mut b = serde_json::to_value(&second).unwrap();
    a.as_object_mut().unwrap().remove("created_date");
    b.as_object_mut().unwrap().remove("created_date");
    assert_eq!(a, b);
}

#[test]
fn test_every_platform_has_a_tracking_url() {
    let config = ContentPackageAssembler::default().build_analytics_config();
    for platform in Platform::ALL {
        let url = config.tracking_url(platform).unwrap();
        assert!(url.contains(&format!("utm_source={}", platform)));
        assert!(config.platform(platform).is_some());
    }
}
