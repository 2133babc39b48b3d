use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::fines::FineError;
use crate::application::lending::LendingError;
use crate::application::users::UserError;

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// ポリシー違反は422、対象が存在しないものは404、コラボレーター障害は500。
#[derive(Debug)]
pub enum ApiError {
    Lending(LendingError),
    Fines(FineError),
    Users(UserError),
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl From<LendingError> for ApiError {
    fn from(err: LendingError) -> Self {
        ApiError::Lending(err)
    }
}

impl From<FineError> for ApiError {
    fn from(err: FineError) -> Self {
        ApiError::Fines(err)
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        ApiError::Users(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 422 Unprocessable Entity - ポリシー違反（理由と、該当する場合は残高を伝える）
            ApiError::Lending(e @ LendingError::UnpaidFines { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPAID_FINES", e.to_string())
            }
            ApiError::Lending(e @ LendingError::OverdueLoans) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "OVERDUE_LOANS", e.to_string())
            }
            ApiError::Lending(e @ LendingError::ItemNotAvailable) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ITEM_NOT_AVAILABLE",
                e.to_string(),
            ),
            ApiError::Lending(e @ LendingError::AlreadyReturned) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ALREADY_RETURNED",
                e.to_string(),
            ),
            ApiError::Users(e @ UserError::HasActiveLoans) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "HAS_ACTIVE_LOANS",
                e.to_string(),
            ),
            ApiError::Users(e @ UserError::HasUnpaidFines) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "HAS_UNPAID_FINES",
                e.to_string(),
            ),

            // 422 Unprocessable Entity - バリデーション失敗
            ApiError::Users(e @ UserError::InvalidEmail) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_EMAIL", e.to_string())
            }
            ApiError::Users(e @ UserError::InvalidPassword) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_PASSWORD",
                e.to_string(),
            ),
            ApiError::Users(e @ UserError::EmailAlreadyRegistered) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMAIL_ALREADY_REGISTERED",
                e.to_string(),
            ),
            ApiError::Fines(e @ FineError::UnsupportedCategory(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNSUPPORTED_CATEGORY",
                e.to_string(),
            ),
            ApiError::Lending(e @ LendingError::Fine(FineError::UnsupportedCategory(_))) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNSUPPORTED_CATEGORY",
                e.to_string(),
            ),

            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::Lending(e @ LendingError::LoanNotFound) => {
                (StatusCode::NOT_FOUND, "LOAN_NOT_FOUND", e.to_string())
            }
            ApiError::Lending(e @ LendingError::ItemNotFound) => {
                (StatusCode::NOT_FOUND, "ITEM_NOT_FOUND", e.to_string())
            }
            ApiError::Fines(e @ FineError::FineNotFound) => {
                (StatusCode::NOT_FOUND, "FINE_NOT_FOUND", e.to_string())
            }
            ApiError::Users(e @ UserError::UserNotFound) => {
                (StatusCode::NOT_FOUND, "USER_NOT_FOUND", e.to_string())
            }

            // 500 Internal Server Error - コラボレーター障害
            // 詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Lending(e) => {
                tracing::error!("Lending error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
            ApiError::Fines(e) => {
                tracing::error!("Fine error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
            ApiError::Users(e) => {
                tracing::error!("User error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
