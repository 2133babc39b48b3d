use thiserror::Error;

use crate::domain::MediaCategory;

/// 罰金管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum FineError {
    /// 罰金が見つからない
    #[error("Fine not found")]
    FineNotFound,

    /// 区分に対応する罰金戦略が登録されていない
    #[error("No fine strategy for media category {0}")]
    UnsupportedCategory(MediaCategory),

    /// FineRepositoryのエラー
    #[error("Fine repository error")]
    FineRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 罰金管理の Result型
pub type Result<T> = std::result::Result<T, FineError>;
