//! # Flight Monitoring - Domain Model
//!
//! Core value objects, enums, and record types for flight image analysis.
//! These types are the single source of truth across normalization,
//! sequence analytics, and the monitoring layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel used for every string field the analysis could not populate.
pub const UNKNOWN: &str = "unknown";

/// Sentinel for an empty safety-concern field.
pub const NO_CONCERNS: &str = "none";

/// Confidence assigned when the source text carries no usable score.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

// =============================================================================
// ENUMS
// =============================================================================

/// Phase of flight visible in an analyzed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Takeoff,
    Landing,
    Cruising,
    GroundOperation,
    Unknown,
}

impl FlightStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Takeoff => "takeoff",
            Self::Landing => "landing",
            Self::Cruising => "cruising",
            Self::GroundOperation => "ground_operation",
            Self::Unknown => "unknown",
        }
    }

    /// Lenient conversion from a model-supplied label. Anything
    /// unrecognized maps to `Unknown` rather than failing.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "takeoff" => Self::Takeoff,
            "landing" => Self::Landing,
            "cruising" => Self::Cruising,
            "ground_operation" => Self::GroundOperation,
            _ => Self::Unknown,
        }
    }
}

impl std::str::FromStr for FlightStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_label(s) {
            Self::Unknown if s.trim().to_lowercase() != "unknown" => {
                Err(DomainError::InvalidStatusLabel(s.to_string()))
            }
            status => Ok(status),
        }
    }
}

/// Weather condition classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Poor,
    Unknown,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Cloudy => "cloudy",
            Self::Poor => "poor",
            Self::Unknown => "unknown",
        }
    }

    /// Lenient conversion from a model-supplied label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "clear" => Self::Clear,
            "cloudy" => Self::Cloudy,
            "poor" => Self::Poor,
            _ => Self::Unknown,
        }
    }
}

/// How a record's fields were produced.
///
/// `Structured` means the model reply contained a parseable JSON object;
/// `Heuristic` means the keyword fallback populated the record from prose.
/// Downstream consumers filter on this rather than guessing from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisOrigin {
    Structured,
    Heuristic,
}

// =============================================================================
// NESTED VALUE OBJECTS
// =============================================================================

/// Aircraft identification extracted from an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftInfo {
    #[serde(rename = "type")]
    pub aircraft_type: String,
    pub registration: String,
    pub operator: String,
}

impl Default for AircraftInfo {
    fn default() -> Self {
        Self {
            aircraft_type: UNKNOWN.to_string(),
            registration: UNKNOWN.to_string(),
            operator: UNKNOWN.to_string(),
        }
    }
}

/// Environmental conditions at capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub weather: WeatherCondition,
    pub visibility: String,
    pub time_of_day: String,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            weather: WeatherCondition::Unknown,
            visibility: UNKNOWN.to_string(),
            time_of_day: UNKNOWN.to_string(),
        }
    }
}

/// Safety assessment for a single image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Safety {
    pub concerns: String,
    pub operational_status: String,
}

impl Safety {
    /// Whether the free-text concerns field flags an actual concern.
    #[must_use]
    pub fn has_concern(&self) -> bool {
        self.concerns.to_lowercase().contains("concern")
    }
}

impl Default for Safety {
    fn default() -> Self {
        Self {
            concerns: NO_CONCERNS.to_string(),
            operational_status: UNKNOWN.to_string(),
        }
    }
}

/// Location context: airport, runway, terrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationContext {
    pub airport: String,
    pub runway: String,
    pub geographic_features: String,
}

impl Default for LocationContext {
    fn default() -> Self {
        Self {
            airport: UNKNOWN.to_string(),
            runway: UNKNOWN.to_string(),
            geographic_features: UNKNOWN.to_string(),
        }
    }
}

/// Operational details: flight phase and ground activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operations {
    pub flight_phase: String,
    pub ground_operations: String,
}

impl Default for Operations {
    fn default() -> Self {
        Self {
            flight_phase: UNKNOWN.to_string(),
            ground_operations: UNKNOWN.to_string(),
        }
    }
}

// =============================================================================
// RECORD TYPES
// =============================================================================

/// Fully-normalized analysis of a single flight image.
///
/// Every field is populated after normalization; fields the source text
/// gave no signal for hold their sentinel values (`"unknown"`, `"none"`,
/// [`DEFAULT_CONFIDENCE`]). Records are immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightAnalysisRecord {
    pub flight_status: FlightStatus,
    pub aircraft_info: AircraftInfo,
    pub environment: Environment,
    pub safety: Safety,
    pub location: LocationContext,
    pub operations: Operations,

    /// Trust in this record, in [0, 1].
    pub confidence_score: f64,

    /// Original model reply, preserved for audit.
    pub raw_response: String,

    /// Caller-supplied flight context, passed through opaquely.
    pub flight_info: Option<serde_json::Value>,

    pub processed_timestamp: DateTime<Utc>,
    pub origin: AnalysisOrigin,

    /// 1-based position within a monitored sequence, when applicable.
    pub sequence_number: Option<u32>,
    pub image_url: Option<String>,
}

impl FlightAnalysisRecord {
    /// Whether this record's safety assessment flags a concern.
    #[must_use]
    pub fn has_concern(&self) -> bool {
        self.safety.has_concern()
    }
}

/// Typed error record for a failed model call.
///
/// Constructed by the monitoring layer when the external call fails;
/// the normalizer is never invoked on that path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: String,
    pub timestamp: DateTime<Utc>,
    pub sequence_number: Option<u32>,
    pub image_url: Option<String>,
}

/// Outcome of analyzing one image: a normalized record or a typed failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum AnalysisOutcome {
    #[serde(rename = "analyzed")]
    Analyzed(FlightAnalysisRecord),
    #[serde(rename = "error")]
    Failed(AnalysisFailure),
}

impl AnalysisOutcome {
    /// The normalized record, if the analysis succeeded.
    #[must_use]
    pub fn record(&self) -> Option<&FlightAnalysisRecord> {
        match self {
            Self::Analyzed(record) => Some(record),
            Self::Failed(_) => None,
        }
    }
}

// =============================================================================
// SEQUENCE ANALYSIS TYPES
// =============================================================================

/// Flight-status transition between consecutive records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub from: FlightStatus,
    pub to: FlightStatus,
    pub position: usize,
}

/// Safety concern observed at a position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyTrend {
    pub concern: String,
    pub position: usize,
}

/// Weather transition between consecutive records.
///
/// Reserved: present in the output schema but not yet emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentalChange {
    pub from: WeatherCondition,
    pub to: WeatherCondition,
    pub position: usize,
}

/// Anomalous observation within a sequence.
///
/// Reserved: present in the output schema but not yet emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    pub description: String,
    pub position: usize,
}

/// Pattern analysis over an ordered sequence of records.
///
/// All four collections are always present in the serialized form, even
/// when empty, for schema stability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceAnalysis {
    pub status_changes: Vec<StatusChange>,
    pub safety_trends: Vec<SafetyTrend>,
    pub environmental_changes: Vec<EnvironmentalChange>,
    pub anomalies: Vec<Anomaly>,
}

/// Aggregate summary of a monitoring session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SequenceSummary {
    /// The sequence contained no records.
    NoData,
    Analyzed {
        total_images_analyzed: usize,
        flight_status_distribution: HashMap<FlightStatus, usize>,
        safety_concerns_count: usize,
        average_confidence: f64,
        recommendations: Vec<String>,
    },
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level errors.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid flight status label: {0}")]
    InvalidStatusLabel(String),

    #[error("Confidence score out of range: {0}")]
    ConfidenceOutOfRange(f64),
}

/// Validate a confidence score is within [0, 1].
pub fn validate_confidence(score: f64) -> Result<f64, DomainError> {
    if (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(DomainError::ConfidenceOutOfRange(score))
    }
}
