mod common;

use common::{bipolar_answer, depression_answer, record};
use mentis_core::models::{AnswerValue, InstrumentType};
use mentis_instruments::schema;
use mentis_scoring::validate::{validate, validate_one, ValidatorConfig};

fn bipolar_schema() -> &'static mentis_instruments::schema::InstrumentSchema {
    schema(InstrumentType::BipolarPersonality)
}

fn screener_schema() -> &'static mentis_instruments::schema::InstrumentSchema {
    schema(InstrumentType::DepressionScreening)
}

#[test]
fn empty_batch_is_invalid() {
    let result = validate(&[], bipolar_schema(), &ValidatorConfig::default());
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.contains("batch is empty")));
}

#[test]
fn missing_session_id_is_an_error() {
    let mut answer = bipolar_answer("energy_orientation", "E", 4);
    answer.session_id = "  ".to_string();
    let result = validate(
        &[answer],
        bipolar_schema(),
        &ValidatorConfig::default(),
    );
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.contains("missing session_id")));
}

#[test]
fn negative_response_time_is_an_error() {
    let mut answer = bipolar_answer("energy_orientation", "E", 4);
    answer.response_time_ms = -250;
    let check = validate_one(&answer, bipolar_schema(), &ValidatorConfig::default());
    assert!(check.errors.iter().any(|e| e.contains("negative")));
}

#[test]
fn unknown_dimension_is_an_error() {
    let answer = bipolar_answer("charisma", "E", 4);
    let check = validate_one(&answer, bipolar_schema(), &ValidatorConfig::default());
    assert!(check.errors.iter().any(|e| e.contains("unknown dimension 'charisma'")));
}

#[test]
fn pole_outside_the_dimension_set_is_an_error() {
    let answer = bipolar_answer("energy_orientation", "T", 4);
    let check = validate_one(&answer, bipolar_schema(), &ValidatorConfig::default());
    assert!(check.errors.iter().any(|e| e.contains("pole 'T' is not valid")));
}

#[test]
fn out_of_range_score_is_an_error() {
    let answer = depression_answer("fatigue", 7.0);
    let check = validate_one(&answer, screener_schema(), &ValidatorConfig::default());
    assert!(check.errors.iter().any(|e| e.contains("outside range")));
}

#[test]
fn mismatched_instrument_type_is_an_error_naming_the_type() {
    let answer = depression_answer("fatigue", 2.0);
    let check = validate_one(&answer, bipolar_schema(), &ValidatorConfig::default());
    assert!(check.errors.iter().any(|e| {
        e.contains("depression_screening") && e.contains("bipolar_personality")
    }));
}

#[test]
fn all_problems_are_reported_together() {
    let mut first = bipolar_answer("charisma", "E", 4);
    first.session_id = String::new();
    let second = bipolar_answer("energy_orientation", "X", 4);

    let result = validate(
        &[first, second],
        bipolar_schema(),
        &ValidatorConfig::default(),
    );
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.contains("missing session_id")));
    assert!(result.errors.iter().any(|e| e.contains("unknown dimension")));
    assert!(result.errors.iter().any(|e| e.contains("pole 'X'")));
}

#[test]
fn slow_response_warns_but_does_not_block() {
    let mut answer = bipolar_answer("energy_orientation", "E", 4);
    answer.response_time_ms = 6 * 60 * 1000;
    let result = validate(
        &[answer],
        bipolar_schema(),
        &ValidatorConfig::default(),
    );
    assert!(result.is_valid);
    assert!(result.warnings.iter().any(|w| w.contains("may reduce accuracy")));
}

#[test]
fn severity_mismatch_is_a_warning_not_an_error() {
    let answer = record(
        "fatigue",
        AnswerValue::DepressionScreening {
            score: 2.0,
            severity: Some("mild".to_string()),
        },
        Some(3),
    );
    let result = validate(
        &[answer],
        screener_schema(),
        &ValidatorConfig::default(),
    );
    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("'mild'") && w.contains("'moderate'")));
}

#[test]
fn matching_declared_severity_passes_quietly() {
    let answer = record(
        "fatigue",
        AnswerValue::DepressionScreening {
            score: 2.0,
            severity: Some("moderate".to_string()),
        },
        Some(3),
    );
    let check = validate_one(&answer, screener_schema(), &ValidatorConfig::default());
    assert!(check.warnings.is_empty());
}

#[test]
fn self_harm_indicator_always_warns_and_suggests() {
    let answer = depression_answer("suicidal_thoughts", 2.0);
    let result = validate(
        &[answer],
        screener_schema(),
        &ValidatorConfig::default(),
    );
    assert!(result.is_valid);
    assert!(result.warnings.iter().any(|w| w.contains("self-harm")));
    assert!(result
        .suggestions
        .iter()
        .any(|s| s.contains("professional help") && s.contains("988")));
}

#[test]
fn self_harm_suggestions_are_never_deduplicated() {
    let batch = vec![
        depression_answer("suicidal_thoughts", 1.0),
        depression_answer("suicidal_thoughts", 3.0),
    ];
    let result = validate(&batch, screener_schema(), &ValidatorConfig::default());
    let escalations = result
        .suggestions
        .iter()
        .filter(|s| s.contains("988"))
        .count();
    assert_eq!(escalations, 2);
}

#[test]
fn zero_self_harm_score_does_not_escalate() {
    let answer = depression_answer("suicidal_thoughts", 0.0);
    let check = validate_one(&answer, screener_schema(), &ValidatorConfig::default());
    assert!(check.suggestions.is_empty());
}

#[test]
fn sensitive_metadata_key_warns() {
    let mut answer = bipolar_answer("energy_orientation", "E", 4);
    answer.metadata.insert(
        "auth_token".to_string(),
        serde_json::Value::String("abc123".to_string()),
    );
    let check = validate_one(&answer, bipolar_schema(), &ValidatorConfig::default());
    assert!(check.warnings.iter().any(|w| w.contains("auth_token")));
}

#[test]
fn oversized_metadata_warns() {
    let mut answer = bipolar_answer("energy_orientation", "E", 4);
    answer.metadata.insert(
        "notes".to_string(),
        serde_json::Value::String("x".repeat(5000)),
    );
    let check = validate_one(&answer, bipolar_schema(), &ValidatorConfig::default());
    assert!(check.warnings.iter().any(|w| w.contains("metadata payload")));
}
