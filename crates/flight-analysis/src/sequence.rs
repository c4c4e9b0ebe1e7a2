//! Trend detection and summarization over ordered record sequences.
//!
//! Order is analysis order as supplied by the caller, not image capture
//! time. Both functions are pure folds over the slice and never fail.

use flight_domain::{
    FlightAnalysisRecord, SafetyTrend, SequenceAnalysis, SequenceSummary, StatusChange,
};
use std::collections::HashMap;

/// Average confidence below which manual review is recommended.
const LOW_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Detect patterns across consecutive records.
///
/// Walks adjacent pairs and emits a [`StatusChange`] wherever the flight
/// status differs, and a [`SafetyTrend`] wherever the current record flags
/// a concern. `environmental_changes` and `anomalies` are reserved slots,
/// always present and currently empty.
#[must_use]
pub fn analyze_sequence(records: &[FlightAnalysisRecord]) -> SequenceAnalysis {
    let mut analysis = SequenceAnalysis::default();

    for (position, pair) in records.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        let position = position + 1;

        if prev.flight_status != curr.flight_status {
            analysis.status_changes.push(StatusChange {
                from: prev.flight_status,
                to: curr.flight_status,
                position,
            });
        }

        if curr.has_concern() {
            analysis.safety_trends.push(SafetyTrend {
                concern: curr.safety.concerns.clone(),
                position,
            });
        }
    }

    analysis
}

/// Summarize a monitoring session.
///
/// Empty input yields [`SequenceSummary::NoData`]. Otherwise counts
/// statuses, counts concern-flagged records, averages confidence, and
/// appends recommendations: the safety check first, then the
/// low-confidence check. The two checks fire independently.
#[must_use]
pub fn summarize(records: &[FlightAnalysisRecord]) -> SequenceSummary {
    if records.is_empty() {
        return SequenceSummary::NoData;
    }

    let mut flight_status_distribution = HashMap::new();
    let mut safety_concerns_count = 0;
    let mut confidence_total = 0.0;

    for record in records {
        *flight_status_distribution
            .entry(record.flight_status)
            .or_insert(0) += 1;
        if record.has_concern() {
            safety_concerns_count += 1;
        }
        confidence_total += record.confidence_score;
    }

    let average_confidence = confidence_total / records.len() as f64;

    let mut recommendations = Vec::new();
    if safety_concerns_count > 0 {
        recommendations.push("Safety concerns detected - review required".to_string());
    }
    if average_confidence < LOW_CONFIDENCE_THRESHOLD {
        recommendations
            .push("Low confidence in analysis - manual review recommended".to_string());
    }

    SequenceSummary::Analyzed {
        total_images_analyzed: records.len(),
        flight_status_distribution,
        safety_concerns_count,
        average_confidence,
        recommendations,
    }
}
