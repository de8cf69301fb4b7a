use app_state::load_app_settings;
use clap::Parser;
use color_eyre::Result;
use ml_analysis::VisualAnalyzer;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Image file to analyze
    image: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_app_settings()?;

    // Logs go to stderr so stdout carries nothing but the JSON result.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    color_eyre::install()?;

    info!("🔍 Loading pretrained encoder...");
    let analyzer = VisualAnalyzer::new(&settings.analyzer)?;

    let analysis = analyzer.analyze_image(&args.image)?;
    println!("{}", serde_json::to_string(&analysis)?);

    Ok(())
}
