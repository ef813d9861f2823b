use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate validation outcome for one answer batch.
///
/// Errors block downstream scoring; warnings and suggestions are advisory
/// and never suppress it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    pub fn merge(&mut self, check: RecordCheck) {
        self.errors.extend(check.errors);
        self.warnings.extend(check.warnings);
        self.suggestions.extend(check.suggestions);
    }
}

/// Validation outcome for a single answer record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordCheck {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}
