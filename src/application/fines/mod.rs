mod errors;
mod fine_service;

pub use errors::{FineError, Result};
pub use fine_service::{outstanding_balance, pay_fine, record_fine};
