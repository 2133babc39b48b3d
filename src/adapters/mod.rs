pub mod json_file;
pub mod memory;
pub mod smtp;
pub mod system_clock;

pub use smtp::{SmtpConfig, SmtpNotificationSender};
pub use system_clock::SystemClock;
