use crate::domain::loan;
use crate::domain::value_objects::UserId;

use super::super::ServiceDependencies;
use super::errors::{LendingError, Result};

/// 利用者が延滞中かつ未返却の貸出を持っているか確認する
///
/// 貸出可否ゲートの2つ目の条件に使用される。
pub async fn has_overdue_loans(deps: &ServiceDependencies, user_id: UserId) -> Result<bool> {
    let today = deps.clock.today();
    let loans = deps
        .loan_repository
        .load_all()
        .await
        .map_err(LendingError::LoanRepositoryError)?;

    Ok(loans
        .iter()
        .any(|l| l.user_id == user_id && loan::is_overdue(l, today)))
}

/// 利用者が未返却の貸出を持っているか確認する
///
/// 延滞しているかどうかは問わない。登録抹消のゲートに使用される。
pub async fn has_active_loans(deps: &ServiceDependencies, user_id: UserId) -> Result<bool> {
    let loans = deps
        .loan_repository
        .load_all()
        .await
        .map_err(LendingError::LoanRepositoryError)?;

    Ok(loans
        .iter()
        .any(|l| l.user_id == user_id && !loan::is_returned(l)))
}
