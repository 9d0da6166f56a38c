use crate::types::TransactionId;
use thiserror::Error;

pub const VIOLATION_DELIMITER: &str = " | ";

/// A single failed validation rule for a transaction payload.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Violation {
    pub field: &'static str,
    pub detail: &'static str
}

impl Violation {
    pub const EMPTY_TYPE: Violation = Violation {
        field: "type",
        detail: "Transaction type cannot be empty."
    };

    pub const NON_POSITIVE_AMOUNT: Violation = Violation {
        field: "amount",
        detail: "Transaction amount must be greater than zero."
    };
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{message}")]
    InvalidInput {
        message: String,
        violations: Vec<Violation>
    },
    #[error("Transaction not found with ID: {transaction_id}")]
    NotFound {
        transaction_id: TransactionId
    }
}

impl StoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            violations: Vec::new()
        }
    }

    pub fn invalid_id() -> Self {
        Self::invalid_input("Transaction ID must be positive.")
    }

    pub fn invalid_page() -> Self {
        Self::invalid_input("Page number must be >= 0 and size must be >= 1")
    }

    pub fn null_transaction() -> Self {
        Self::invalid_input("Transaction cannot be null.")
    }

    pub fn invalid_payload(violations: Vec<Violation>) -> Self {
        let message = violations.iter()
            .map(|violation| violation.detail)
            .collect::<Vec<_>>()
            .join(VIOLATION_DELIMITER);

        Self::InvalidInput { message, violations }
    }

    pub fn not_found(transaction_id: TransactionId) -> Self {
        Self::NotFound { transaction_id }
    }
}
