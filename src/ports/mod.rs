pub mod catalog;
pub mod clock;
pub mod fine_repository;
pub mod loan_repository;
pub mod notification_sender;
pub mod user_repository;

pub use catalog::Catalog;
pub use clock::Clock;
pub use fine_repository::FineRepository;
pub use loan_repository::LoanRepository;
pub use notification_sender::NotificationSender;
pub use user_repository::UserRepository;
