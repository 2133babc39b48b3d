use thiserror::Error;

use super::super::fines::FineError;

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LendingError {
    /// 利用者に未払いの罰金がある（残高を表示用に保持する）
    #[error("User has unpaid fines ({balance}). Borrowing not allowed.")]
    UnpaidFines { balance: f64 },

    /// 利用者に延滞中の貸出がある
    #[error("User has overdue loans. Borrowing not allowed until overdue items are returned.")]
    OverdueLoans,

    /// 資料が見つからない
    #[error("Item not found")]
    ItemNotFound,

    /// 資料が貸出中
    #[error("Item is not available for borrowing")]
    ItemNotAvailable,

    /// 貸出が見つからない
    #[error("Loan not found")]
    LoanNotFound,

    /// 既に返却済み
    #[error("Loan already returned")]
    AlreadyReturned,

    /// 罰金コンテキストのエラー
    #[error("Fine error: {0}")]
    Fine(#[from] FineError),

    /// カタログのエラー
    #[error("Catalog error")]
    CatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// LoanRepositoryのエラー
    #[error("Loan repository error")]
    LoanRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 貸出管理の Result型
pub type Result<T> = std::result::Result<T, LendingError>;
