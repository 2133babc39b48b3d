mod dependencies;

pub mod fines;
pub mod lending;
pub mod reminders;
pub mod users;

pub use dependencies::ServiceDependencies;
