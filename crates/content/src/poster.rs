//! Print layout for the A3 mosque poster. Colors are taken from the brand
//! palette so the poster follows any palette change.

use serde::{Deserialize, Serialize};
use zakat_campaign_core::ColorPalette;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterSpec {
    pub size: String,
    pub orientation: String,
    pub resolution: String,
    pub color_mode: String,
    pub design_elements: PosterDesign,
    pub color_scheme: PosterColorScheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterDesign {
    pub header: PosterHeader,
    pub main_content: PosterMainContent,
    pub qr_code: PosterQrCode,
    pub footer: PosterFooter,
    pub decorative_elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterHeader {
    pub text: String,
    pub subtitle: String,
    pub font: String,
    pub color: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterMainContent {
    pub flowchart: Flowchart,
    pub nisab_info: NisabInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flowchart {
    pub steps: Vec<String>,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NisabInfo {
    pub malaysia: String,
    pub update_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterQrCode {
    pub size: String,
    pub position: String,
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterFooter {
    pub text: String,
    pub logos: Vec<String>,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterColorScheme {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub background: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn build_poster_spec(palette: &ColorPalette) -> PosterSpec {
    PosterSpec {
        size: "A3 (297x420mm)".to_string(),
        orientation: "Portrait".to_string(),
        resolution: "300 DPI".to_string(),
        color_mode: "CMYK".to_string(),
        design_elements: PosterDesign {
            header: PosterHeader {
                text: "Bayar Zakat Kripto Anda".to_string(),
                subtitle: "Kewajipan Moden Umat Islam".to_string(),
                font: "Arabic/Malay calligraphy style".to_string(),
                color: palette.primary.clone(),
                position: "top_center".to_string(),
            },
            main_content: PosterMainContent {
                flowchart: Flowchart {
                    steps: strings(&[
                        "Kira Nilai Aset Kripto",
                        "Tolak Hutang Semasa",
                        "Bandingkan dengan Nisab",
                        "Bayar 2.5% jika Wajib",
                    ]),
                    style: "Islamic geometric pattern background".to_string(),
                },
                nisab_info: NisabInfo {
                    malaysia: "RM 21,500 (85g emas)".to_string(),
                    update_note: "Dikemaskini bulanan".to_string(),
                },
            },
            qr_code: PosterQrCode {
                size: "80x80mm".to_string(),
                position: "bottom_center".to_string(),
                url: "https://zakatcalculator.asean".to_string(),
                label: "Imbas untuk Kalkulator Digital".to_string(),
            },
            footer: PosterFooter {
                text: "Disokong oleh JAKIM dan Badan Zakat Negeri".to_string(),
                logos: strings(&["JAKIM", "MAIWP", "LZS"]),
                contact: "Untuk maklumat lanjut: zakat@islam.gov.my".to_string(),
            },
            decorative_elements: strings(&[
                "Islamic geometric borders",
                "Mosque silhouette",
                "Crescent and star motifs",
                "Arabic calligraphy accents",
            ]),
        },
        color_scheme: PosterColorScheme {
            primary: palette.primary.clone(),
            secondary: palette.secondary.clone(),
            text: palette.dark.clone(),
            background: "#FFFFFF".to_string(),
        },
    }
}
