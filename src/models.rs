use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SymptomError {
    #[error("symptom name must not be empty")]
    EmptyName,
    #[error("severity {0} out of range (expected 1-10)")]
    SeverityOutOfRange(u8),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptom {
    pub id: Uuid,
    pub name: String,
    pub severity: u8,
    pub timestamp: DateTime<Utc>,
    pub body_location: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i64>,
    pub associated_symptoms: Vec<String>,
    pub is_recurring: bool,
}

/// Entry-creation boundary checks: non-empty name, severity 1-10.
/// Anything stored has already passed this.
pub fn validate_entry(name: &str, severity: u8) -> Result<(), SymptomError> {
    if name.trim().is_empty() {
        return Err(SymptomError::EmptyName);
    }
    if !(1..=10).contains(&severity) {
        return Err(SymptomError::SeverityOutOfRange(severity));
    }
    Ok(())
}

impl Symptom {
    pub fn new(
        name: String,
        severity: u8,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<Self, SymptomError> {
        validate_entry(&name, severity)?;
        Ok(Symptom {
            id: Uuid::new_v4(),
            name,
            severity,
            timestamp: timestamp.unwrap_or_else(Utc::now),
            body_location: None,
            description: None,
            duration_minutes: None,
            associated_symptoms: Vec::new(),
            is_recurring: false,
        })
    }

    pub fn is_emergency(&self) -> bool {
        self.severity >= 8
    }

    pub fn is_urgent(&self) -> bool {
        self.is_emergency() || self.associated_symptoms.len() > 3
    }

    pub fn duration_in_hours(&self) -> f64 {
        self.duration_minutes.map(|m| m as f64 / 60.0).unwrap_or(0.0)
    }
}
