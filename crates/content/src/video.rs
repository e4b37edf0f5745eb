//! Facebook video ad script.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoScene {
    /// Time range within the ad, e.g. `"6-12s"`.
    pub time: String,
    pub visual: String,
    pub audio: String,
    pub text_overlay: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoScript {
    /// Total length in seconds.
    pub duration: u32,
    pub scenes: Vec<VideoScene>,
    pub call_to_action: String,
    pub target_audience: String,
}

fn scene(time: &str, visual: &str, audio: &str, text_overlay: Option<&str>) -> VideoScene {
    VideoScene {
        time: time.to_string(),
        visual: visual.to_string(),
        audio: audio.to_string(),
        text_overlay: text_overlay.map(str::to_string),
    }
}

/// Build the 30-second, six-scene script.
pub fn build_video_script() -> VideoScript {
    VideoScript {
        duration: 30,
        scenes: vec![
            scene(
                "0-3s",
                "Animation: Gold bars transforming into cryptocurrency coins",
                "Upbeat Islamic nasheed background music",
                None,
            ),
            scene(
                "3-6s",
                "Text animation with Islamic geometric patterns",
                "Music continues",
                Some("Ada Aset Kripto? Wajib Zakat!"),
            ),
            scene(
                "6-12s",
                "Host speaking (Malaysian Muslim influencer)",
                "Host explains: \"Seperti emas, aset kripto juga wajib dizakatkan jika cukup syarat\"",
                Some("Fatwa JAKIM: WAJIB jika cukup syarat"),
            ),
            scene(
                "12-18s",
                "App demo: Calculator interface with MYR input",
                "Host continues: \"Guna kalkulator digital untuk kira dengan tepat\"",
                Some("Nisab Malaysia: RM 21,500"),
            ),
            scene(
                "18-24s",
                "Payment flow demonstration",
                "Host: \"Bayar terus melalui dompet digital anda\"",
                Some("Bayar kepada JAKIM, MAIWP, LZS"),
            ),
            scene(
                "24-30s",
                "QR code with download buttons",
                "Host: \"Download sekarang dan tunaikan kewajipan anda\"",
                Some("Download App Sekarang"),
            ),
        ],
        call_to_action: "Learn More / Download App".to_string(),
        target_audience: "Malaysian Muslims aged 25-45 interested in cryptocurrency".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_timings() {
        let script = build_video_script();
        assert_eq!(script.duration, 30);
        let times: Vec<&str> = script.scenes.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, vec!["0-3s", "3-6s", "6-12s", "12-18s", "18-24s", "24-30s"]);
    }

    #[test]
    fn test_only_opening_scene_lacks_overlay() {
        let script = build_video_script();
        assert!(script.scenes[0].text_overlay.is_none());
        assert!(script.scenes[1..].iter().all(|s| s.text_overlay.is_some()));
        assert_eq!(
            script.scenes[3].text_overlay.as_deref(),
            Some("Nisab Malaysia: RM 21,500")
        );
    }

    #[test]
    fn test_missing_overlay_serializes_as_null() {
        let json = serde_json::to_value(build_video_script()).unwrap();
        assert!(json["scenes"][0]["text_overlay"].is_null());
        assert_eq!(json["call_to_action"], "Learn More / Download App");
    }
}
