//! Report assembly for monitoring sessions.

use crate::error::Result;
use crate::sequence::{analyze_sequence, summarize};
use chrono::{DateTime, Utc};
use flight_domain::{AnalysisFailure, FlightAnalysisRecord, SequenceAnalysis, SequenceSummary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full output of a monitoring session: per-image records, transport
/// failures, sequence patterns, and the aggregate summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringReport {
    pub session_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub individual_analyses: Vec<FlightAnalysisRecord>,
    pub failures: Vec<AnalysisFailure>,
    pub sequence_analysis: SequenceAnalysis,
    pub monitoring_summary: SequenceSummary,
}

/// Build a report from the records and failures of one session.
///
/// Failures are carried alongside the analyses but excluded from trend
/// detection and the summary, so a transport error cannot masquerade as a
/// status transition.
#[must_use]
pub fn build_report(
    records: Vec<FlightAnalysisRecord>,
    failures: Vec<AnalysisFailure>,
) -> MonitoringReport {
    let sequence_analysis = analyze_sequence(&records);
    let monitoring_summary = summarize(&records);

    MonitoringReport {
        session_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        individual_analyses: records,
        failures,
        sequence_analysis,
        monitoring_summary,
    }
}

impl MonitoringReport {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the report as Markdown.
    pub fn render_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("# Flight Monitoring Report\n\n");
        md.push_str(&format!("**Session:** {}\n", self.session_id));
        md.push_str(&format!(
            "**Generated:** {}\n\n",
            self.generated_at.to_rfc3339()
        ));

        match &self.monitoring_summary {
            SequenceSummary::NoData => {
                md.push_str("## Summary\n\nNo images analyzed.\n\n");
            }
            SequenceSummary::Analyzed {
                total_images_analyzed,
                flight_status_distribution,
                safety_concerns_count,
                average_confidence,
                recommendations,
            } => {
                md.push_str("## Summary\n\n");
                md.push_str("| Metric | Value |\n");
                md.push_str("|--------|-------|\n");
                md.push_str(&format!("| Images Analyzed | {} |\n", total_images_analyzed));
                md.push_str(&format!("| Safety Concerns | {} |\n", safety_concerns_count));
                md.push_str(&format!(
                    "| Average Confidence | {:.2} |\n",
                    average_confidence
                ));
                md.push_str(&format!("| Failed Calls | {} |\n\n", self.failures.len()));

                md.push_str("### Status Distribution\n\n");
                md.push_str("| Status | Count |\n");
                md.push_str("|--------|-------|\n");
                let mut statuses: Vec<_> = flight_status_distribution.iter().collect();
                statuses.sort_by_key(|(status, _)| status.as_str());
                for (status, count) in statuses {
                    md.push_str(&format!("| {} | {} |\n", status.as_str(), count));
                }
                md.push('\n');

                if !recommendations.is_empty() {
                    md.push_str("### Recommendations\n\n");
                    for rec in recommendations {
                        md.push_str(&format!("- {}\n", rec));
                    }
                    md.push('\n');
                }
            }
        }

        if !self.sequence_analysis.status_changes.is_empty() {
            md.push_str("## Status Changes\n\n");
            md.push_str("| Position | From | To |\n");
            md.push_str("|----------|------|----|\n");
            for change in &self.sequence_analysis.status_changes {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    change.position,
                    change.from.as_str(),
                    change.to.as_str()
                ));
            }
            md.push('\n');
        }

        if !self.sequence_analysis.safety_trends.is_empty() {
            md.push_str("## Safety Trends\n\n");
            md.push_str("| Position | Concern |\n");
            md.push_str("|----------|--------|\n");
            for trend in &self.sequence_analysis.safety_trends {
                md.push_str(&format!("| {} | {} |\n", trend.position, trend.concern));
            }
            md.push('\n');
        }

        if !self.failures.is_empty() {
            md.push_str("## Failed Analyses\n\n");
            md.push_str("| Sequence | Error |\n");
            md.push_str("|----------|-------|\n");
            for failure in &self.failures {
                let seq = failure
                    .sequence_number
                    .map_or_else(|| "-".to_string(), |n| n.to_string());
                md.push_str(&format!("| {} | {} |\n", seq, failure.error));
            }
            md.push('\n');
        }

        md
    }
}
