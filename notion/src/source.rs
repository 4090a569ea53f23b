use async_trait::async_trait;

use crate::{QueryError, Record};

/// Where creator records are looked up. Implementations must not mutate
/// anything: the same query against unchanged data yields the same records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Records whose `Email` property equals `email` exactly. Callers
    /// lower-case the address beforehand.
    async fn query_by_email(&self, email: &str) -> Result<Vec<Record>, QueryError>;
}
