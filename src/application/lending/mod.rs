mod borrowing;
mod errors;
mod queries;
mod returning;

pub use borrowing::borrow_item;
pub use errors::{LendingError, Result};
pub use queries::{has_active_loans, has_overdue_loans};
pub use returning::return_item;
