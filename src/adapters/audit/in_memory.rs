//! In-Memory Audit Log Adapter
//!
//! Keeps appended records in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::PredictionRecord;
use crate::ports::{AuditLog, AuditLogError};

/// In-memory audit log
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    records: Arc<RwLock<Vec<PredictionRecord>>>,
    failure: Option<AuditLogError>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that rejects every append with `error`.
    pub fn failing(error: AuditLogError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Snapshot of everything appended so far, in order.
    pub async fn records(&self) -> Vec<PredictionRecord> {
        self.records.read().await.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn append(&self, record: &PredictionRecord) -> Result<(), AuditLogError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.records.write().await.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::fixtures::patient_inputs;
    use crate::domain::assessment::{RiskAssessment, RiskLabel, RiskProbability};

    fn record() -> PredictionRecord {
        PredictionRecord::new(
            patient_inputs(),
            RiskAssessment {
                label: RiskLabel::HighRisk,
                probability: RiskProbability::try_new(0.7).unwrap(),
            },
        )
    }

    #[tokio::test]
    async fn keeps_records_in_order() {
        let log = InMemoryAuditLog::new();
        let first = record();
        let second = record();

        log.append(&first).await.unwrap();
        log.append(&second).await.unwrap();

        let records = log.records().await;
        assert_eq!(records, vec![first, second]);
    }

    #[tokio::test]
    async fn failing_log_stores_nothing() {
        let log = InMemoryAuditLog::failing(AuditLogError::permission_denied("log.csv"));
        assert!(log.append(&record()).await.is_err());
        assert!(log.is_empty().await);
    }
}
