use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use tracing::debug;

use crate::models::{StoreError, Transaction, TransactionPayload};
use crate::storage::TransactionStore;
use crate::types::TransactionId;

/// In-memory transaction store shared by every request handler.
pub struct TransactionStorage {
    cache: DashMap<TransactionId, Transaction>,
    sequence: AtomicI64
}

impl TransactionStorage {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
            sequence: AtomicI64::new(0)
        }
    }

    fn next_id(&self) -> TransactionId {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn check_id(id: TransactionId) -> Result<(), StoreError> {
        if id <= 0 {
            return Err(StoreError::invalid_id())
        }

        Ok(())
    }
}

impl Default for TransactionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for TransactionStorage {
    fn create(&self, candidate: TransactionPayload) -> Result<Transaction, StoreError> {
        let details = candidate.validate()?;
        let transaction = details.with_id(self.next_id());

        self.cache.insert(transaction.id, transaction.clone());

        debug!("Transaction [{}]:[{}] created", transaction.id, transaction.transaction_type);

        Ok(transaction)
    }

    fn list(&self, page: i64, size: i64) -> Result<Vec<Transaction>, StoreError> {
        if page < 0 || size < 1 {
            return Err(StoreError::invalid_page())
        }

        //NOTE: Each record is cloned under its shard lock, so a concurrent writer can never expose half an update
        let mut transactions: Vec<Transaction> = self.cache.iter()
            .map(|entry| entry.value().clone())
            .collect();

        transactions.sort_unstable_by_key(|transaction| transaction.id);

        let size = usize::try_from(size).unwrap_or(usize::MAX);
        let start = usize::try_from(page).unwrap_or(usize::MAX)
            .saturating_mul(size)
            .min(transactions.len());

        Ok(transactions.into_iter().skip(start).take(size).collect())
    }

    fn get_by_id(&self, id: TransactionId) -> Result<Transaction, StoreError> {
        Self::check_id(id)?;

        self.cache.get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn update(&self, id: TransactionId, patch: TransactionPayload) -> Result<Transaction, StoreError> {
        Self::check_id(id)?;
        let details = patch.validate()?;

        let mut entry = self.cache.get_mut(&id)
            .ok_or_else(|| StoreError::not_found(id))?;

        *entry = details.with_id(id);

        debug!("Transaction [{}]:[{}] updated", entry.id, entry.transaction_type);

        Ok(entry.value().clone())
    }

    fn delete(&self, id: TransactionId) -> Result<(), StoreError> {
        Self::check_id(id)?;

        self.cache.remove(&id).ok_or_else(|| StoreError::not_found(id))?;

        debug!("Transaction [{id}] deleted");

        Ok(())
    }
}
