//! Data models for the Patient Records application

use serde::{Deserialize, Serialize};

/// Store-generated account identifier
pub type AccountId = i64;

/// Patient record
///
/// Rows are populated outside this system and are only ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: i32,
    pub age: i32,
    pub gender: String,
    pub occupation_id: i32,
    pub residential_area_id: i32,
    /// Body mass index, absent when not measured
    pub bmi: Option<f64>,
    pub physical_activity_level: String,
    pub dietary_habits: String,
    pub air_quality_index: i32,
    pub family_history_cancer: bool,
    pub previous_cancer_diagnosis: bool,
}
