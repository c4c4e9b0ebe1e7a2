//! Response normalization: model reply text to [`FlightAnalysisRecord`].
//!
//! The model is asked for JSON but frequently wraps it in prose or returns
//! plain text. This module scans for an embedded JSON object first and
//! falls back to keyword extraction when parsing fails. Neither path can
//! fail: a record always comes back, marked with its origin.

use crate::extractor::extract_from_text;
use chrono::Utc;
use flight_domain::{
    AircraftInfo, AnalysisOrigin, Environment, FlightAnalysisRecord, FlightStatus,
    LocationContext, Operations, Safety, WeatherCondition, DEFAULT_CONFIDENCE, NO_CONCERNS,
    UNKNOWN,
};
use serde_json::Value;

/// Normalize a raw model reply into a fully-populated record.
///
/// Scans `raw_text` for the first `{` and last `}` and attempts to parse
/// the substring as a JSON object. On success the parsed fields are
/// coerced into the record (`origin = Structured`); otherwise the keyword
/// extractor populates it (`origin = Heuristic`). `raw_response`,
/// `flight_info`, and `processed_timestamp` are always set here,
/// overriding any same-named keys in the parsed object.
#[must_use]
pub fn normalize(raw_text: &str, flight_context: Option<Value>) -> FlightAnalysisRecord {
    let mut record = match embedded_json_object(raw_text) {
        Some(object) => record_from_object(&object),
        None => extract_from_text(raw_text),
    };

    record.raw_response = raw_text.to_string();
    record.flight_info = flight_context;
    record.processed_timestamp = Utc::now();
    record
}

/// Extract and parse the brace-delimited substring, if any.
fn embedded_json_object(raw_text: &str) -> Option<serde_json::Map<String, Value>> {
    let start = raw_text.find('{')?;
    let end = raw_text.rfind('}')?;
    if end < start {
        return None;
    }
    match serde_json::from_str::<Value>(&raw_text[start..=end]) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Coerce a parsed JSON object into the fixed record shape.
///
/// Missing or mistyped fields fall back to their sentinels rather than
/// rejecting the whole object.
fn record_from_object(object: &serde_json::Map<String, Value>) -> FlightAnalysisRecord {
    FlightAnalysisRecord {
        flight_status: object
            .get("flight_status")
            .and_then(Value::as_str)
            .map_or(FlightStatus::Unknown, FlightStatus::from_label),
        aircraft_info: AircraftInfo {
            aircraft_type: nested_str(object, "aircraft_info", "type"),
            registration: nested_str(object, "aircraft_info", "registration"),
            operator: nested_str(object, "aircraft_info", "operator"),
        },
        environment: Environment {
            weather: object
                .get("environment")
                .and_then(|env| env.get("weather"))
                .and_then(Value::as_str)
                .map_or(WeatherCondition::Unknown, WeatherCondition::from_label),
            visibility: nested_str(object, "environment", "visibility"),
            time_of_day: nested_str(object, "environment", "time_of_day"),
        },
        safety: Safety {
            concerns: nested_str_or(object, "safety", "concerns", NO_CONCERNS),
            operational_status: nested_str(object, "safety", "operational_status"),
        },
        location: LocationContext {
            airport: nested_str(object, "location", "airport"),
            runway: nested_str(object, "location", "runway"),
            geographic_features: nested_str(object, "location", "geographic_features"),
        },
        operations: Operations {
            flight_phase: nested_str(object, "operations", "flight_phase"),
            ground_operations: nested_str(object, "operations", "ground_operations"),
        },
        confidence_score: object
            .get("confidence_score")
            .and_then(Value::as_f64)
            .map_or(DEFAULT_CONFIDENCE, |score| score.clamp(0.0, 1.0)),
        raw_response: String::new(),
        flight_info: None,
        processed_timestamp: Utc::now(),
        origin: AnalysisOrigin::Structured,
        sequence_number: None,
        image_url: None,
    }
}

fn nested_str(object: &serde_json::Map<String, Value>, outer: &str, inner: &str) -> String {
    nested_str_or(object, outer, inner, UNKNOWN)
}

fn nested_str_or(
    object: &serde_json::Map<String, Value>,
    outer: &str,
    inner: &str,
    fallback: &str,
) -> String {
    object
        .get(outer)
        .and_then(|nested| nested.get(inner))
        .and_then(Value::as_str)
        .map_or_else(|| fallback.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STRUCTURED_REPLY: &str = r#"Here is the analysis you requested:
    {
        "flight_status": "landing",
        "aircraft_info": {"type": "A320", "registration": "C-FGHI", "operator": "Air Canada"},
        "environment": {"weather": "cloudy", "visibility": "moderate", "time_of_day": "dusk"},
        "safety": {"concerns": "none", "operational_status": "normal"},
        "location": {"airport": "YVR", "runway": "26L", "geographic_features": "coastal"},
        "operations": {"flight_phase": "final approach", "ground_operations": "n/a"},
        "confidence_score": 0.85
    }
    Let me know if you need more detail."#;

    #[test]
    fn test_structured_parse() {
        let context = json!({"flight_number": "AC123"});
        let record = normalize(STRUCTURED_REPLY, Some(context.clone()));

        assert_eq!(record.origin, AnalysisOrigin::Structured);
        assert_eq!(record.flight_status, FlightStatus::Landing);
        assert_eq!(record.aircraft_info.aircraft_type, "A320");
        assert_eq!(record.aircraft_info.operator, "Air Canada");
        assert_eq!(record.environment.weather, WeatherCondition::Cloudy);
        assert_eq!(record.location.runway, "26L");
        assert_eq!(record.operations.flight_phase, "final approach");
        assert_eq!(record.confidence_score, 0.85);
        assert_eq!(record.raw_response, STRUCTURED_REPLY);
        assert_eq!(record.flight_info, Some(context));
    }

    #[test]
    fn test_partial_json_falls_to_sentinels() {
        let record = normalize(r#"{"flight_status": "takeoff"}"#, None);
        assert_eq!(record.origin, AnalysisOrigin::Structured);
        assert_eq!(record.flight_status, FlightStatus::Takeoff);
        assert_eq!(record.aircraft_info.registration, UNKNOWN);
        assert_eq!(record.safety.concerns, NO_CONCERNS);
        assert_eq!(record.confidence_score, DEFAULT_CONFIDENCE);
    }

    #[test]
    fn test_no_braces_uses_heuristic() {
        let record = normalize("aircraft approaching for landing in clear skies", None);
        assert_eq!(record.origin, AnalysisOrigin::Heuristic);
        assert_eq!(record.flight_status, FlightStatus::Landing);
        assert_eq!(record.environment.weather, WeatherCondition::Clear);
        assert_eq!(record.confidence_score, DEFAULT_CONFIDENCE);
        assert_eq!(
            record.raw_response,
            "aircraft approaching for landing in clear skies"
        );
    }

    #[test]
    fn test_malformed_json_uses_heuristic() {
        let record = normalize(r#"{"flight_status": "takeoff", broken}"#, None);
        assert_eq!(record.origin, AnalysisOrigin::Heuristic);
        // The keyword fallback still reads the prose.
        assert_eq!(record.flight_status, FlightStatus::Takeoff);
    }

    #[test]
    fn test_reversed_braces_use_heuristic() {
        let record = normalize("closing } before opening { here", None);
        assert_eq!(record.origin, AnalysisOrigin::Heuristic);
    }

    #[test]
    fn test_confidence_clamped() {
        let record = normalize(r#"{"confidence_score": 3.5}"#, None);
        assert_eq!(record.confidence_score, 1.0);
    }

    #[test]
    fn test_idempotent_field_values() {
        let context = json!({"origin": "Toronto"});
        let first = normalize(STRUCTURED_REPLY, Some(context.clone()));
        let second = normalize(STRUCTURED_REPLY, Some(context));

        assert_eq!(first.flight_status, second.flight_status);
        assert_eq!(first.aircraft_info, second.aircraft_info);
        assert_eq!(first.environment, second.environment);
        assert_eq!(first.safety, second.safety);
        assert_eq!(first.location, second.location);
        assert_eq!(first.operations, second.operations);
        assert_eq!(first.confidence_score, second.confidence_score);
        assert_eq!(first.raw_response, second.raw_response);
        assert_eq!(first.flight_info, second.flight_info);
    }

    #[test]
    fn test_metadata_overrides_parsed_keys() {
        let reply = r#"{"flight_status": "cruising", "raw_response": "spoofed", "processed_timestamp": "1999-01-01T00:00:00Z"}"#;
        let record = normalize(reply, None);
        assert_eq!(record.raw_response, reply);
        assert!(record.processed_timestamp.timestamp() > 946_684_800);
    }
}
