use serde::{Deserialize, Serialize};

use crate::models::{StoreError, Violation};
use crate::types::{Amount, TransactionId};

/// A stored transaction record.
///
/// The `id` is assigned by the store on creation and never changes afterwards.
/// Only `transaction_type` and `amount` are replaced by an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store assigned identifier, unique and never reused.
    pub id: TransactionId,
    /// Free-form category label such as "Deposit" or "Withdrawal".
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Strictly positive amount.
    pub amount: Amount
}

/// Request body for create and update.
///
/// Both fields stay optional so that missing or null values reach validation
/// instead of failing deserialization. Any `id` sent by the caller is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionPayload {
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub amount: Option<Amount>
}

/// The fields of a payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDetails {
    pub transaction_type: String,
    pub amount: Amount
}

impl TransactionPayload {
    #[cfg(test)]
    pub fn new(transaction_type: &str, amount: Amount) -> Self {
        Self {
            transaction_type: Some(transaction_type.to_string()),
            amount: Some(amount)
        }
    }

    /// Unwraps a possibly null request body.
    pub fn require(payload: Option<Self>) -> Result<Self, StoreError> {
        payload.ok_or_else(StoreError::null_transaction)
    }

    /// Checks every rule and reports all of the failures together.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidInput` if:
    /// - `type` is missing or blank after trimming.
    /// - `amount` is missing, zero, negative or NaN.
    pub fn validate(self) -> Result<TransactionDetails, StoreError> {
        let mut violations = Vec::new();

        let transaction_type = self.transaction_type
            .filter(|value| !value.trim().is_empty());

        if transaction_type.is_none() {
            violations.push(Violation::EMPTY_TYPE);
        }

        //NOTE: NaN fails this comparison too
        let amount = self.amount.filter(|value| *value > 0.0);

        if amount.is_none() {
            violations.push(Violation::NON_POSITIVE_AMOUNT);
        }

        match (transaction_type, amount) {
            (Some(transaction_type), Some(amount)) => Ok(TransactionDetails { transaction_type, amount }),
            _ => Err(StoreError::invalid_payload(violations))
        }
    }
}

impl TransactionDetails {
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            transaction_type: self.transaction_type,
            amount: self.amount
        }
    }
}
