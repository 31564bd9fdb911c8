use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Symptom;

/// In-memory symptom store. Cheap to clone — handlers share one list.
/// Nothing survives a restart.
#[derive(Clone, Default)]
pub struct SymptomStore {
    symptoms: Arc<RwLock<Vec<Symptom>>>,
}

impl SymptomStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, symptom: Symptom) {
        self.symptoms.write().await.push(symptom);
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let mut symptoms = self.symptoms.write().await;
        let before = symptoms.len();
        symptoms.retain(|s| s.id != id);
        symptoms.len() < before
    }

    /// Newest first.
    pub async fn all(&self) -> Vec<Symptom> {
        let mut symptoms = self.symptoms.read().await.clone();
        symptoms.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        symptoms
    }

    /// Records logged strictly after `now - days`, in insertion order.
    pub async fn history(&self, days: i64) -> Vec<Symptom> {
        let cutoff = Utc::now() - Duration::days(days);
        self.symptoms
            .read()
            .await
            .iter()
            .filter(|s| s.timestamp > cutoff)
            .cloned()
            .collect()
    }

    pub async fn emergency(&self) -> Vec<Symptom> {
        self.symptoms
            .read()
            .await
            .iter()
            .filter(|s| s.is_emergency())
            .cloned()
            .collect()
    }

    pub async fn snapshot(&self) -> Vec<Symptom> {
        self.symptoms.read().await.clone()
    }
}
