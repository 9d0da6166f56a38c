mod transaction_storage;

use crate::models::{StoreError, Transaction, TransactionPayload};
use crate::types::TransactionId;

pub use transaction_storage::TransactionStorage;

/// Create, read, list, update and delete over transaction records.
///
/// Every operation either succeeds completely or leaves the store untouched.
pub trait TransactionStore: Send + Sync + 'static {
    fn create(&self, candidate: TransactionPayload) -> Result<Transaction, StoreError>;
    fn list(&self, page: i64, size: i64) -> Result<Vec<Transaction>, StoreError>;
    fn get_by_id(&self, id: TransactionId) -> Result<Transaction, StoreError>;
    fn update(&self, id: TransactionId, patch: TransactionPayload) -> Result<Transaction, StoreError>;
    fn delete(&self, id: TransactionId) -> Result<(), StoreError>;
}
