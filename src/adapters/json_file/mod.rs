pub mod catalog;
pub mod fine_repository;
pub mod loan_repository;
mod snapshot;
pub mod user_repository;

pub use catalog::Catalog as JsonFileCatalog;
pub use fine_repository::FineRepository as JsonFileFineRepository;
pub use loan_repository::LoanRepository as JsonFileLoanRepository;
pub use user_repository::UserRepository as JsonFileUserRepository;
