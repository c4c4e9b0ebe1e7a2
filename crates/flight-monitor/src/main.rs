//! Flight Monitoring CLI
//!
//! Replays captured model replies through the full normalization and
//! sequence-analysis pipeline, then exports the session report.

use anyhow::{Context, Result};
use clap::Parser;
use flight_analysis::export::export_report;
use flight_domain::SequenceSummary;
use flight_monitor::{FlightMonitor, MonitorConfig, ReplayModel};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flight-monitor")]
#[command(about = "Analyze a sequence of captured flight-image model replies")]
struct Args {
    /// Files containing raw model replies, one per image, in sequence order
    #[arg(required = true)]
    replies: Vec<PathBuf>,

    /// JSON file with flight context passed through to every record
    #[arg(short, long)]
    context: Option<PathBuf>,

    /// Output path for the JSON report (default: timestamped file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pause between analyses in milliseconds
    #[arg(long, default_value = "0")]
    pause_ms: u64,

    /// Also print the Markdown report
    #[arg(long)]
    markdown: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("flight_monitor=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let flight_info: Option<Value> = args
        .context
        .as_ref()
        .map(|path| {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading context file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing context file {}", path.display()))
        })
        .transpose()?;

    let mut replies = Vec::with_capacity(args.replies.len());
    let mut image_urls = Vec::with_capacity(args.replies.len());
    for path in &args.replies {
        let reply = fs::read_to_string(path)
            .with_context(|| format!("reading reply file {}", path.display()))?;
        replies.push(reply);
        image_urls.push(path.display().to_string());
    }

    info!("Starting monitoring session: {} images", image_urls.len());

    let config = MonitorConfig::from_env().with_pause(Duration::from_millis(args.pause_ms));
    let export_dir = config.export_dir.clone();
    let monitor = FlightMonitor::new(ReplayModel::new(replies), config);

    let report = monitor.monitor_sequence(&image_urls, flight_info.as_ref()).await;

    info!("Session {}", report.session_id);
    info!(
        "Status changes: {} | Safety trends: {} | Failures: {}",
        report.sequence_analysis.status_changes.len(),
        report.sequence_analysis.safety_trends.len(),
        report.failures.len()
    );
    match &report.monitoring_summary {
        SequenceSummary::NoData => info!("No data to summarize"),
        SequenceSummary::Analyzed {
            total_images_analyzed,
            safety_concerns_count,
            average_confidence,
            recommendations,
            ..
        } => {
            info!(
                "Analyzed {} images | Concerns: {} | Avg confidence: {:.2}",
                total_images_analyzed, safety_concerns_count, average_confidence
            );
            for rec in recommendations {
                info!("Recommendation: {}", rec);
            }
        }
    }

    let written = export_report(&report, args.output.as_deref(), &export_dir)?;
    info!("Report written to {}", written.display());

    if args.markdown {
        println!("{}", report.render_markdown());
    }

    Ok(())
}
