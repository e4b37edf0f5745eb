//! Twitter thread: a header tweet followed by six numbered parts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadTweet {
    /// 1-based position in the thread.
    pub tweet: u32,
    pub content: String,
    /// Filename of the attached image.
    pub media: String,
}

const TWEETS: [(&str, &str); 7] = [
    (
        "Thread 🧵: Panduan Zakat Kripto untuk Rakyat Malaysia 🇲🇾\n\nApakah anda tahu bahawa aset kripto juga wajib dizakatkan? Mari kita pelajari bersama! 👇\n\n#ZakatDigital #FintechIslam #KriptoHalal",
        "thread_header_image.jpg",
    ),
    (
        "1/6: Apakah Zakat Kripto?\n\n✅ Kewajipan baru di era digital\n✅ Fatwa JAKIM: WAJIB jika cukup syarat\n✅ Sama seperti zakat emas dan perak\n✅ Kadar: 2.5% dari nilai bersih\n\n#ZakatKripto #JAKIM",
        "crypto_zakat_infographic.jpg",
    ),
    (
        "2/6: Syarat Wajib Zakat Kripto:\n\n✓ Milik penuh aset (bukan pinjaman)\n✓ Melebihi nisab (RM21,500 untuk Malaysia)\n✓ Cukup haul (354 hari)\n✓ Aset berkembang/berpotensi tumbuh\n\n#SyaratZakat #KriptoHalal",
        "zakat_conditions_chart.jpg",
    ),
    (
        "3/6: Cara Pengiraan Mudah:\n\n📊 Formula: (Aset Kripto - Hutang) × 2.5%\n\n💡 Contoh:\n• Aset: RM30,000\n• Hutang: RM5,000  \n• Bersih: RM25,000\n• Zakat: RM25,000 × 0.025 = RM625\n\n#PengiraanZakat #ContohMudah",
        "calculation_example.jpg",
    ),
    (
        "4/6: Badan Zakat Rasmi Malaysia:\n\n🏛️ @MAIWPgov - Wilayah Persekutuan\n🏛️ @PPZMAIWP - Selangor\n🏛️ @LZS_Negeri9 - Negeri Sembilan\n\n✅ Semua disahkan halal\n🔗 Link pembayaran di bio\n\n#BadanZakat #ZakatMalaysia",
        "official_zakat_bodies.jpg",
    ),
    (
        "5/6: Teknologi Blockchain untuk Ketelusan:\n\n🔗 Setiap transaksi direkod\n📊 Agihan tepat ke 8 asnaf\n📜 Sijil zakat digital\n🔍 Audit mudah dan telus\n\n#BlockchainZakat #Transparency #TechIslam",
        "blockchain_transparency.jpg",
    ),
    (
        "6/6: Kalkulator Digital Percuma! 🆓\n\n📱 Kira zakat anda sekarang\n⚡ Hasil segera\n💳 Bayar terus online\n📄 Sijil automatik\n\n👉 zakatcalculator.asean\n\nRT untuk bantu kawan-kawan! 🔄\n\n#ZakatCalculator #DigitalZakat",
        "app_qr_code.jpg",
    ),
];

/// Build the seven-tweet thread, numbered from 1.
pub fn build_thread() -> Vec<ThreadTweet> {
    TWEETS
        .iter()
        .zip(1u32..)
        .map(|((content, media), tweet)| ThreadTweet {
            tweet,
            content: content.to_string(),
            media: media.to_string(),
        })
        .collect()
}
