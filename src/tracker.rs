use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedSymptom {
    pub id: Uuid,
    pub name: String,
    pub severity: u8,
    pub timestamp: DateTime<Utc>,
    pub body_location: BodyLocation,
    pub characteristics: Vec<SymptomCharacteristic>,
    pub triggers: Vec<String>,
    pub relief_factors: Vec<String>,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyLocation {
    Head,
    Chest,
    Abdomen,
    BackUpper,
    BackLower,
    ArmLeft,
    ArmRight,
    LegLeft,
    LegRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCharacteristic {
    Sharp,
    Dull,
    Throbbing,
    Burning,
    Stabbing,
    Cramping,
    Aching,
    Tingling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SymptomPattern {
    /// Occurrences per week across the span of matching records.
    pub frequency: f64,
    pub average_duration_minutes: f64,
    pub common_triggers: Vec<String>,
}

/// Append-only symptom log with per-name pattern analysis.
/// The pattern computed on each insert is kept, so callers can read the
/// latest one without rescanning the log.
#[derive(Default)]
pub struct SymptomTracker {
    symptoms: Vec<EnhancedSymptom>,
    patterns: HashMap<String, SymptomPattern>,
}

impl SymptomTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, symptom: EnhancedSymptom) -> SymptomPattern {
        let name = symptom.name.clone();
        self.symptoms.push(symptom);

        let matching: Vec<&EnhancedSymptom> =
            self.symptoms.iter().filter(|s| s.name == name).collect();
        let pattern = SymptomPattern {
            frequency: frequency(&matching),
            average_duration_minutes: average_duration(&matching),
            common_triggers: common_triggers(&matching),
        };
        self.patterns.insert(name, pattern.clone());
        pattern
    }

    pub fn history(&self, timeframe: TimeFrame) -> Vec<EnhancedSymptom> {
        self.history_at(Utc::now(), timeframe)
    }

    /// Records strictly after `now - timeframe`.
    pub fn history_at(&self, now: DateTime<Utc>, timeframe: TimeFrame) -> Vec<EnhancedSymptom> {
        let cutoff = match timeframe {
            TimeFrame::Day => now - Duration::days(1),
            TimeFrame::Week => now - Duration::weeks(1),
            TimeFrame::Month => now - Months::new(1),
        };
        self.symptoms
            .iter()
            .filter(|s| s.timestamp > cutoff)
            .cloned()
            .collect()
    }

    pub fn pattern_for(&self, name: &str) -> Option<&SymptomPattern> {
        self.patterns.get(name)
    }
}

// count / weeks spanned; 0 when every record shares one timestamp.
fn frequency(symptoms: &[&EnhancedSymptom]) -> f64 {
    let earliest = symptoms.iter().map(|s| s.timestamp).min();
    let latest = symptoms.iter().map(|s| s.timestamp).max();
    let (Some(earliest), Some(latest)) = (earliest, latest) else {
        return 0.0;
    };
    let weeks_passed = (latest - earliest).num_days() as f64 / 7.0;
    if weeks_passed > 0.0 {
        symptoms.len() as f64 / weeks_passed
    } else {
        0.0
    }
}

fn average_duration(symptoms: &[&EnhancedSymptom]) -> f64 {
    if symptoms.is_empty() {
        return 0.0;
    }
    let total: i64 = symptoms.iter().map(|s| s.duration_minutes).sum();
    total as f64 / symptoms.len() as f64
}

// Top 3 by count; ties keep the order triggers were first seen in.
fn common_triggers(symptoms: &[&EnhancedSymptom]) -> Vec<String> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut seen_order: Vec<&str> = Vec::new();
    for trigger in symptoms.iter().flat_map(|s| s.triggers.iter()) {
        let count = counts.entry(trigger.as_str()).or_insert(0);
        if *count == 0 {
            seen_order.push(trigger.as_str());
        }
        *count += 1;
    }
    let mut ranked: Vec<&str> = seen_order;
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    ranked.into_iter().take(3).map(String::from).collect()
}

/// Shared handle for route modules, same role `PgPool` plays elsewhere.
#[derive(Clone, Default)]
pub struct TrackerStore {
    inner: Arc<RwLock<SymptomTracker>>,
}

impl TrackerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_entry(&self, symptom: EnhancedSymptom) -> SymptomPattern {
        self.inner.write().await.add_entry(symptom)
    }

    pub async fn history(&self, timeframe: TimeFrame) -> Vec<EnhancedSymptom> {
        self.inner.read().await.history(timeframe)
    }

    pub async fn pattern_for(&self, name: &str) -> Option<SymptomPattern> {
        self.inner.read().await.pattern_for(name).cloned()
    }
}
