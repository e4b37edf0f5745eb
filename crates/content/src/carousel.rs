//! Instagram carousel slides.

use serde::{Deserialize, Serialize};
use zakat_campaign_core::CountryProfile;

/// One carousel slide. Only the fields a slide uses are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSlide {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<CountryProfile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    pub background: String,
    pub elements: Vec<String>,
}

impl CarouselSlide {
    fn new(title: &str, background: &str, elements: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            steps: None,
            data: None,
            features: None,
            cta: None,
            background: background.to_string(),
            elements: strings(elements),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the five slides in publication order. The nisab comparison slide
/// embeds the given country table.
pub fn build_carousel(countries: &[CountryProfile]) -> Vec<CarouselSlide> {
    vec![
        CarouselSlide {
            subtitle: Some("Memenuhi tanggungjawab agama di era blockchain".to_string()),
            ..CarouselSlide::new(
                "Zakat Kripto: Kewajipan Baru Umat Islam Digital",
                "gradient_green",
                &["crypto_coins", "gold_bars", "mosque_silhouette"],
            )
        },
        CarouselSlide {
            steps: Some(strings(&[
                "1. Kira nilai aset kripto dalam mata wang tempatan",
                "2. Tolak hutang dari jumlah aset",
                "3. Jika melebihi nisab, bayar 2.5%",
            ])),
            ..CarouselSlide::new(
                "Cara Kira Zakat Kripto dalam 3 Langkah",
                "white",
                &["calculator_icon", "arrow_flow", "percentage_badge"],
            )
        },
        CarouselSlide {
            data: Some(countries.to_vec()),
            ..CarouselSlide::new(
                "Nisab ASEAN 2024",
                "light_blue",
                &["country_flags", "currency_symbols", "gold_standard"],
            )
        },
        CarouselSlide {
            features: Some(strings(&[
                "Kalkulator automatik",
                "Bayar terus ke badan zakat",
                "Sijil digital",
                "Rekod transparan",
            ])),
            ..CarouselSlide::new(
                "Bayar Zakat Secara Digital",
                "app_mockup",
                &["phone_mockup", "qr_code", "blockchain_icons"],
            )
        },
        CarouselSlide {
            cta: Some("Imbas QR code untuk mula mengira zakat kripto anda".to_string()),
            ..CarouselSlide::new(
                "Kira Sekarang",
                "gradient_gold",
                &["large_qr_code", "download_buttons", "social_proof"],
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use zakat_campaign_core::reference::country_profiles;

    #[test]
    fn test_five_slides_in_order() {
        let slides = build_carousel(&country_profiles());
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[0].title, "Zakat Kripto: Kewajipan Baru Umat Islam Digital");

        let titles: Vec<&str> = slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Zakat Kripto: Kewajipan Baru Umat Islam Digital",
                "Cara Kira Zakat Kripto dalam 3 Langkah",
                "Nisab ASEAN 2024",
                "Bayar Zakat Secara Digital",
                "Kira Sekarang",
            ]
        );
    }

    #[test]
    fn test_optional_fields_per_slide() {
        let slides = build_carousel(&country_profiles());
        assert!(slides[0].subtitle.is_some());
        assert_eq!(slides[1].steps.as_ref().map(Vec::len), Some(3));
        assert_eq!(slides[2].data.as_ref().map(Vec::len), Some(5));
        assert_eq!(slides[3].features.as_ref().map(Vec::len), Some(4));
        assert!(slides[4].cta.is_some());

        // Every slide carries exactly one optional block.
        for slide in &slides {
            let present = [
                slide.subtitle.is_some(),
                slide.steps.is_some(),
                slide.data.is_some(),
                slide.features.is_some(),
                slide.cta.is_some(),
            ];
            assert_eq!(present.iter().filter(|p| **p).count(), 1);
            assert_eq!(slide.elements.len(), 3);
        }
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let slides = build_carousel(&country_profiles());
        let json = serde_json::to_value(&slides[4]).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("cta"));
        assert!(!obj.contains_key("steps"));
        assert!(!obj.contains_key("subtitle"));
        assert_eq!(obj["background"], "gradient_gold");
    }
}
