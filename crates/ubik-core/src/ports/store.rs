//! Key-value storage port.

use async_trait::async_trait;

/// String key-value storage, the shape of browser local storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value under `key`, or `None` when missing.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing storage cannot be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The storage refused the operation, for example a full quota.
    #[error("Operation failed: {0}")]
    Operation(String),
}
