mod errors;
mod user_service;

pub use errors::{Result, UserError};
pub use user_service::{authenticate, find_user, register, unregister};
