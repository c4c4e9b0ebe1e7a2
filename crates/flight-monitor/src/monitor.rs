//! Sequence monitoring loop.
//!
//! Strictly sequential: each image's model call completes before the next
//! begins, with a configurable pause in between for external rate limits.
//! A failed call becomes a typed failure record and the batch continues.

use crate::client::VisionModel;
use crate::config::MonitorConfig;
use crate::prompt::build_analysis_prompt;
use chrono::Utc;
use flight_analysis::reports::{build_report, MonitoringReport};
use flight_analysis::normalize;
use flight_domain::{AnalysisFailure, AnalysisOutcome};
use serde_json::Value;
use tokio::time::sleep;
use tracing::{info, warn};

/// Drives a vision model through image analyses and normalizes replies.
pub struct FlightMonitor<M: VisionModel> {
    model: M,
    config: MonitorConfig,
}

impl<M: VisionModel> FlightMonitor<M> {
    pub fn new(model: M, config: MonitorConfig) -> Self {
        Self { model, config }
    }

    /// Analyze a single image.
    ///
    /// A model failure yields [`AnalysisOutcome::Failed`] with the error
    /// message and a timestamp; the normalizer is not invoked on that path.
    pub async fn analyze_flight_image(
        &self,
        image_url: &str,
        flight_info: Option<&Value>,
    ) -> AnalysisOutcome {
        let prompt = build_analysis_prompt(flight_info);

        match self.model.analyze_image(image_url, &prompt).await {
            Ok(raw_text) => {
                AnalysisOutcome::Analyzed(normalize(&raw_text, flight_info.cloned()))
            }
            Err(err) => {
                warn!("Model call failed for {}: {}", image_url, err);
                AnalysisOutcome::Failed(AnalysisFailure {
                    error: err.to_string(),
                    timestamp: Utc::now(),
                    sequence_number: None,
                    image_url: Some(image_url.to_string()),
                })
            }
        }
    }

    /// Analyze an ordered image sequence and build the session report.
    ///
    /// Sequence numbers are 1-based. The pause is skipped after the final
    /// image.
    pub async fn monitor_sequence(
        &self,
        image_urls: &[String],
        flight_info: Option<&Value>,
    ) -> MonitoringReport {
        let mut records = Vec::new();
        let mut failures = Vec::new();

        for (i, image_url) in image_urls.iter().enumerate() {
            info!("Analyzing image {}/{}...", i + 1, image_urls.len());

            let sequence_number = Some(i as u32 + 1);
            match self.analyze_flight_image(image_url, flight_info).await {
                AnalysisOutcome::Analyzed(mut record) => {
                    record.sequence_number = sequence_number;
                    record.image_url = Some(image_url.clone());
                    info!(
                        "  status={} origin={:?} confidence={:.2}",
                        record.flight_status.as_str(),
                        record.origin,
                        record.confidence_score
                    );
                    records.push(record);
                }
                AnalysisOutcome::Failed(mut failure) => {
                    failure.sequence_number = sequence_number;
                    failures.push(failure);
                }
            }

            if i < image_urls.len() - 1 && !self.config.pause.is_zero() {
                sleep(self.config.pause).await;
            }
        }

        build_report(records, failures)
    }
}
