mod errors;
mod transaction;

pub use errors::{StoreError, Violation};
pub use transaction::{Transaction, TransactionDetails, TransactionPayload};
