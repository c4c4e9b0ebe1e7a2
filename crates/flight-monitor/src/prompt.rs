//! Analysis prompt construction.

use serde_json::Value;

const BASE_PROMPT: &str = r#"Analyze this flight-related image and provide a structured response in JSON format.
Focus on the following aspects:

1. **Flight Status**: Identify if this is a takeoff, landing, cruising, or ground operation
2. **Aircraft Information**:
   - Aircraft type (if visible)
   - Registration number (if visible)
   - Airline/operator (if visible)
3. **Environmental Conditions**:
   - Weather conditions
   - Visibility
   - Time of day
4. **Safety Assessment**:
   - Any visible safety concerns
   - Operational status
5. **Location Context**:
   - Airport/runway identification (if possible)
   - Geographic features
6. **Operational Details**:
   - Flight phase
   - Ground operations (if applicable)

Please respond with a JSON object containing these fields:
{
    "flight_status": "string",
    "aircraft_info": {
        "type": "string",
        "registration": "string",
        "operator": "string"
    },
    "environment": {
        "weather": "string",
        "visibility": "string",
        "time_of_day": "string"
    },
    "safety": {
        "concerns": "string",
        "operational_status": "string"
    },
    "location": {
        "airport": "string",
        "runway": "string",
        "geographic_features": "string"
    },
    "operations": {
        "flight_phase": "string",
        "ground_operations": "string"
    },
    "confidence_score": "float (0-1)"
}"#;

/// Build the instruction sent alongside each image.
///
/// Embeds the expected response schema; caller-supplied flight context is
/// appended as pretty JSON when present.
#[must_use]
pub fn build_analysis_prompt(flight_context: Option<&Value>) -> String {
    match flight_context {
        Some(context) => {
            let rendered = serde_json::to_string_pretty(context)
                .unwrap_or_else(|_| context.to_string());
            format!("{BASE_PROMPT}\n\nAdditional Flight Context: {rendered}")
        }
        None => BASE_PROMPT.to_string(),
    }
}
