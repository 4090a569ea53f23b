use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use notion::{QueryError, Record, RecordSource};
use serde_json::Value;

/// Stands in for the hosted database: answers every query with the same
/// canned outcome and remembers what it was asked.
#[derive(Clone)]
pub struct FakeRecords {
    outcome: Arc<dyn Fn() -> Result<Vec<Record>, QueryError> + Send + Sync>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeRecords {
    pub fn with_records(records: Vec<Value>) -> Self {
        let records: Vec<Record> = records
            .into_iter()
            .map(|record| serde_json::from_value(record).expect("invalid fake record"))
            .collect();
        Self::answering(move || Ok(records.clone()))
    }

    pub fn empty() -> Self {
        Self::with_records(vec![])
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self::answering(move || {
            Err(QueryError::Status {
                status,
                body: r#"{"object":"error","code":"object_not_found"}"#.to_string(),
            })
        })
    }

    pub fn unreachable() -> Self {
        Self::answering(|| Err(QueryError::Transport("connection refused".to_string())))
    }

    fn answering(
        outcome: impl Fn() -> Result<Vec<Record>, QueryError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            outcome: Arc::new(outcome),
            queries: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSource for FakeRecords {
    async fn query_by_email(&self, email: &str) -> Result<Vec<Record>, QueryError> {
        self.queries.lock().unwrap().push(email.to_string());
        (self.outcome)()
    }
}
