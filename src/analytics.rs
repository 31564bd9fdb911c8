use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{Datelike, Timelike, Weekday};
use serde::Serialize;

use crate::models::Symptom;

#[derive(Debug, Clone, Serialize)]
pub struct SymptomTrends {
    pub average_severity: f64,
    pub most_frequent_symptom: String,
    pub peak_times: Vec<u32>,
    pub weekly_pattern: BTreeMap<String, u32>,
}

/// Derives summary statistics over a list of symptoms.
/// Returns `None` for empty input instead of a NaN average.
pub fn analyze_trends(symptoms: &[Symptom]) -> Option<SymptomTrends> {
    if symptoms.is_empty() {
        return None;
    }
    Some(SymptomTrends {
        average_severity: average_severity(symptoms),
        most_frequent_symptom: most_frequent_symptom(symptoms),
        peak_times: peak_times(symptoms),
        weekly_pattern: weekly_pattern(symptoms),
    })
}

fn average_severity(symptoms: &[Symptom]) -> f64 {
    let total: u32 = symptoms.iter().map(|s| s.severity as u32).sum();
    total as f64 / symptoms.len() as f64
}

// Ties broken by first appearance in the input, so the result is stable.
fn most_frequent_symptom(symptoms: &[Symptom]) -> String {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut seen_order: Vec<&str> = Vec::new();
    for s in symptoms {
        let count = counts.entry(s.name.as_str()).or_insert(0);
        if *count == 0 {
            seen_order.push(s.name.as_str());
        }
        *count += 1;
    }

    let mut best = "";
    let mut best_count = 0;
    for name in seen_order {
        let count = counts[name];
        if count > best_count {
            best = name;
            best_count = count;
        }
    }
    best.to_string()
}

fn peak_times(symptoms: &[Symptom]) -> Vec<u32> {
    let hours: BTreeSet<u32> = symptoms.iter().map(|s| s.timestamp.hour()).collect();
    hours.into_iter().collect()
}

fn weekly_pattern(symptoms: &[Symptom]) -> BTreeMap<String, u32> {
    // Seed all seven days so absent weekdays map to an explicit zero.
    let mut pattern: BTreeMap<String, u32> = ALL_WEEKDAYS
        .iter()
        .map(|day| (weekday_name(*day).to_string(), 0))
        .collect();
    for s in symptoms {
        let name = weekday_name(s.timestamp.weekday());
        pattern
            .entry(name.to_string())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }
    pattern
}

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
