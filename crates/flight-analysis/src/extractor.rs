//! Heuristic keyword extraction from unstructured model replies.
//!
//! Fallback for replies that carry no parseable JSON. Only flight status
//! and weather are extracted; every other field stays at its sentinel.
//! Widening the extraction is a known possible improvement, but the
//! limited scope is the tested baseline behavior.

use flight_domain::{
    AnalysisOrigin, FlightAnalysisRecord, FlightStatus, WeatherCondition, DEFAULT_CONFIDENCE,
};

/// Keyword rules checked in priority order; the first rule with any
/// matching keyword wins, regardless of where the match sits in the text.
const STATUS_RULES: &[(&[&str], FlightStatus)] = &[
    (&["takeoff", "take off", "departure"], FlightStatus::Takeoff),
    (&["landing", "approach", "arrival"], FlightStatus::Landing),
    (&["cruising", "flight", "airborne"], FlightStatus::Cruising),
    (&["ground", "parked", "gate"], FlightStatus::GroundOperation),
];

const WEATHER_RULES: &[(&[&str], WeatherCondition)] = &[
    (&["clear", "sunny", "good"], WeatherCondition::Clear),
    (&["cloudy", "overcast"], WeatherCondition::Cloudy),
    (&["rain", "storm", "bad"], WeatherCondition::Poor),
];

/// Populate a low-confidence record skeleton from free text.
///
/// Always returns a fully-populated record with confidence fixed at
/// [`DEFAULT_CONFIDENCE`]; metadata fields (`raw_response`, `flight_info`,
/// `processed_timestamp`) are attached by the caller.
#[must_use]
pub fn extract_from_text(text: &str) -> FlightAnalysisRecord {
    let text_lower = text.to_lowercase();

    let mut record = FlightAnalysisRecord {
        flight_status: FlightStatus::Unknown,
        aircraft_info: Default::default(),
        environment: Default::default(),
        safety: Default::default(),
        location: Default::default(),
        operations: Default::default(),
        confidence_score: DEFAULT_CONFIDENCE,
        raw_response: String::new(),
        flight_info: None,
        processed_timestamp: chrono::Utc::now(),
        origin: AnalysisOrigin::Heuristic,
        sequence_number: None,
        image_url: None,
    };

    record.flight_status = match_rules(&text_lower, STATUS_RULES, FlightStatus::Unknown);
    record.environment.weather = match_rules(&text_lower, WEATHER_RULES, WeatherCondition::Unknown);

    record
}

/// Evaluate an ordered rule list against lower-cased text, first match wins.
fn match_rules<T: Copy>(text_lower: &str, rules: &[(&[&str], T)], fallback: T) -> T {
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| text_lower.contains(kw)))
        .map_or(fallback, |(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_domain::{NO_CONCERNS, UNKNOWN};

    #[test]
    fn test_status_priority_order() {
        // "departure" outranks "approach" because the takeoff rule is
        // checked first, even though "approach" appears earlier in text.
        let record = extract_from_text("on approach after a delayed departure");
        assert_eq!(record.flight_status, FlightStatus::Takeoff);
    }

    #[test]
    fn test_status_categories() {
        assert_eq!(
            extract_from_text("aircraft on final approach").flight_status,
            FlightStatus::Landing
        );
        assert_eq!(
            extract_from_text("jet airborne over the coast").flight_status,
            FlightStatus::Cruising
        );
        assert_eq!(
            extract_from_text("parked at the gate").flight_status,
            FlightStatus::GroundOperation
        );
        assert_eq!(
            extract_from_text("no aviation content here").flight_status,
            FlightStatus::Unknown
        );
    }

    #[test]
    fn test_weather_detection() {
        assert_eq!(
            extract_from_text("overcast morning").environment.weather,
            WeatherCondition::Cloudy
        );
        assert_eq!(
            extract_from_text("heavy rain on the apron").environment.weather,
            WeatherCondition::Poor
        );
        assert_eq!(
            extract_from_text("nothing notable").environment.weather,
            WeatherCondition::Unknown
        );
    }

    #[test]
    fn test_case_insensitive_matching() {
        let record = extract_from_text("TAKEOFF roll in CLEAR conditions");
        assert_eq!(record.flight_status, FlightStatus::Takeoff);
        assert_eq!(record.environment.weather, WeatherCondition::Clear);
    }

    #[test]
    fn test_unextracted_fields_stay_at_sentinels() {
        let record = extract_from_text("Boeing 747 registration N12345 at Heathrow runway 27L");
        assert_eq!(record.aircraft_info.aircraft_type, UNKNOWN);
        assert_eq!(record.aircraft_info.registration, UNKNOWN);
        assert_eq!(record.location.airport, UNKNOWN);
        assert_eq!(record.safety.concerns, NO_CONCERNS);
        assert_eq!(record.confidence_score, DEFAULT_CONFIDENCE);
        assert_eq!(record.origin, AnalysisOrigin::Heuristic);
    }
}
