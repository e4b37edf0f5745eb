//! Zakat Calculator ASEAN — social media campaign package generator.
//!
//! Assembles the carousel, video script, thread, poster, and analytics plan
//! and prints them to stdout.

use clap::Parser;
use std::io::{self, Write};
use tracing::{info, warn};
use zakat_campaign_content::{to_json, write_text, ContentPackageAssembler};
use zakat_campaign_core::config::{AppConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "zakat-campaign")]
#[command(about = "Generate the Zakat Calculator ASEAN social media campaign package")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (extension optional)
    #[arg(short, long, env = "ZAKAT_CAMPAIGN_CONFIG")]
    config: Option<String>,

    /// Output format: text or json (overrides config)
    #[arg(long, env = "ZAKAT_CAMPAIGN__OUTPUT__FORMAT")]
    format: Option<OutputFormat>,

    /// UTM campaign tag for tracking links (overrides config)
    #[arg(long, env = "ZAKAT_CAMPAIGN__CAMPAIGN__UTM_CAMPAIGN")]
    utm_campaign: Option<String>,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "zakat_campaign=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = AppConfig::load(cli.config.as_deref());
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    init_tracing(config.logging.json);

    if let Err(e) = &loaded {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(utm_campaign) = cli.utm_campaign {
        config.campaign.utm_campaign = utm_campaign;
    }

    info!(
        format = %config.output.format,
        utm_campaign = %config.campaign.utm_campaign,
        "Configuration loaded"
    );

    let assembler = ContentPackageAssembler::new(&config.campaign);
    assembler.validate()?;

    let package = assembler.export_package();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output.format {
        OutputFormat::Text => write_text(&package, &mut out)?,
        OutputFormat::Json => writeln!(out, "{}", to_json(&package)?)?,
    }
    out.flush()?;

    Ok(())
}
