//! Record builders shared by the scoring test suites.
#![allow(dead_code)]

use std::collections::BTreeMap;

use jiff::Timestamp;
use mentis_core::models::{AnswerRecord, AnswerValue};
use uuid::Uuid;

pub fn record(dimension: &str, value: AnswerValue, confidence: Option<i64>) -> AnswerRecord {
    AnswerRecord {
        id: Uuid::new_v4(),
        session_id: "session-1".to_string(),
        question_id: format!("q_{dimension}"),
        dimension: dimension.to_string(),
        value,
        confidence,
        response_time_ms: 15_000,
        timestamp: Timestamp::UNIX_EPOCH,
        free_text: None,
        metadata: BTreeMap::new(),
    }
}

pub fn bipolar_answer(dimension: &str, polarity: &str, confidence: i64) -> AnswerRecord {
    record(
        dimension,
        AnswerValue::BipolarPersonality {
            polarity: polarity.to_string(),
        },
        Some(confidence),
    )
}

pub fn depression_answer(dimension: &str, score: f64) -> AnswerRecord {
    record(
        dimension,
        AnswerValue::DepressionScreening {
            score,
            severity: None,
        },
        Some(3),
    )
}

pub fn competency_answer(dimension: &str, score: f64) -> AnswerRecord {
    record(dimension, AnswerValue::Competency { score }, Some(4))
}

pub fn satisfaction_answer(dimension: &str, score: f64) -> AnswerRecord {
    record(
        dimension,
        AnswerValue::SatisfactionIndex { score },
        Some(4),
    )
}
