use thiserror::Error;

/// 利用者管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum UserError {
    /// メールアドレスの形式が不正
    #[error("Email format example: user@example.com")]
    InvalidEmail,

    /// パスワードがポリシーを満たさない
    #[error(
        "Password must be at least 8 characters, contain upper & lower case letters, a digit, and a special character"
    )]
    InvalidPassword,

    /// メールアドレスが登録済み
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    /// 利用者が見つからない
    #[error("User not found")]
    UserNotFound,

    /// 未返却の貸出があるため登録抹消できない
    #[error("User has active loans. Cannot unregister until all items are returned.")]
    HasActiveLoans,

    /// 未払いの罰金があるため登録抹消できない
    #[error("User has unpaid fines. Cannot unregister until all fines are paid.")]
    HasUnpaidFines,

    /// UserRepositoryのエラー
    #[error("User repository error")]
    UserRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 貸出コンテキストのエラー
    #[error("Lending error")]
    LendingError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 罰金コンテキストのエラー
    #[error("Fine error")]
    FineError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 利用者管理の Result型
pub type Result<T> = std::result::Result<T, UserError>;
