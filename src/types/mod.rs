pub type TransactionId = i64;
pub type Amount = f64;

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
