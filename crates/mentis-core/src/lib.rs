//! mentis-core
//!
//! Pure domain types for the mentis scoring engine: answer records,
//! validation results, dimension scores, answer patterns, and the synthesized
//! scoring result. No I/O dependency — this is the shared vocabulary of the
//! mentis system.

pub mod models;
