use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ServiceDependencies;
use crate::application::fines::{outstanding_balance, pay_fine as execute_pay_fine};
use crate::application::lending::{
    borrow_item as execute_borrow_item, return_item as execute_return_item,
};
use crate::application::reminders::send_overdue_reminders;
use crate::application::users::{register as execute_register, unregister as execute_unregister};
use crate::domain::commands::{PayFine, ReturnItem, UnregisterUser};
use crate::domain::value_objects::{FineId, LoanId, UserId};

use super::error::ApiError;
use super::types::{
    BalanceResponse, BorrowRequest, LoanResponse, RegisterUserRequest, RemindersResponse,
    UserResponse,
};

/// ハンドラー間で共有されるアプリケーション状態
///
/// コアは読み込み〜変更〜書き換えのサイクルが直列に実行されることを
/// 前提とする。axumはリクエストを並行に処理するため、変更系ハンドラーは
/// write_lockを保持してサイクル全体を直列化する。これがないと、同じ
/// 古いスナップショットを見た2つの貸出リクエストが同一資料を
/// 二重貸出しうる。
pub struct AppState {
    pub service_deps: ServiceDependencies,
    pub write_lock: tokio::sync::Mutex<()>,
}

// ============================================================================
// 利用者
// ============================================================================

/// POST /users - 利用者を登録
///
/// バリデーション：メール形式・パスワードポリシー・メール重複。
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let _guard = state.write_lock.lock().await;

    let user = execute_register(&state.service_deps, req.to_command()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// DELETE /users/:id - 利用者を登録抹消
///
/// 強制されるビジネスルール：
/// - 未返却の貸出がないこと（先に判定）
/// - 未払いの罰金がないこと
pub async fn unregister_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let _guard = state.write_lock.lock().await;

    let cmd = UnregisterUser {
        user_id: UserId::from_uuid(user_id),
    };
    execute_unregister(&state.service_deps, cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /users/:id/balance - 未払い残高を取得
///
/// 罰金を持たない利用者には0.0を返す。
pub async fn get_user_balance(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = outstanding_balance(&state.service_deps, UserId::from_uuid(user_id)).await?;

    Ok(Json(BalanceResponse { user_id, balance }))
}

// ============================================================================
// 貸出
// ============================================================================

/// POST /loans - 資料を借りる
///
/// 強制されるビジネスルール（この順で判定される）：
/// - 未払いの罰金がないこと（残高がエラーに載る）
/// - 延滞中の貸出がないこと
/// - 資料が存在し貸出可能であること
pub async fn borrow_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BorrowRequest>,
) -> Result<(StatusCode, Json<LoanResponse>), ApiError> {
    let _guard = state.write_lock.lock().await;

    let loan = execute_borrow_item(&state.service_deps, req.to_command()).await?;

    Ok((StatusCode::CREATED, Json(LoanResponse::from(loan))))
}

/// POST /loans/:id/return - 資料を返却
///
/// 延滞していれば返却の永続化より前に罰金が記録される。
pub async fn return_item(
    State(state): State<Arc<AppState>>,
    Path(loan_id): Path<Uuid>,
) -> Result<Json<LoanResponse>, ApiError> {
    let _guard = state.write_lock.lock().await;

    let cmd = ReturnItem {
        loan_id: LoanId::from_uuid(loan_id),
    };
    let loan = execute_return_item(&state.service_deps, cmd).await?;

    Ok(Json(LoanResponse::from(loan)))
}

// ============================================================================
// 罰金
// ============================================================================

/// POST /fines/:id/pay - 罰金を支払う
///
/// 既に支払済みの罰金への支払いは冪等な無操作。
pub async fn pay_fine(
    State(state): State<Arc<AppState>>,
    Path(fine_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let _guard = state.write_lock.lock().await;

    let cmd = PayFine {
        fine_id: FineId::from_uuid(fine_id),
    };
    execute_pay_fine(&state.service_deps, cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// 督促
// ============================================================================

/// POST /reminders - 延滞督促バッチを実行
///
/// 延滞中かつ未返却の貸出1件につき1通送信し、成功数を返す。
/// 重複排除は行わない（同じ延滞に対して毎回再送される）。
pub async fn run_reminders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RemindersResponse>, ApiError> {
    let sent = send_overdue_reminders(&state.service_deps)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(RemindersResponse { sent }))
}
