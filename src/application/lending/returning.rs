use crate::domain::commands::{RecordFine, ReturnItem};
use crate::domain::errors::ReturnLoanError;
use crate::domain::loan::{self, Loan};

use super::super::{ServiceDependencies, fines};
use super::errors::{LendingError, Result};

/// 資料を返却する
///
/// ビジネスルール：
/// - 貸出が存在すること
/// - 既に返却済みでないこと
/// - 延滞日数が正なら、返却を永続化する**前に**罰金を記録する
///   （return_loanの契約：返却の記録は罰金計算済みであることを前提とする）
/// - 額0の罰金は記録されない（罰金コンテキストの責務）
///
/// # 戻り値
/// 返却日が設定された貸出記録
pub async fn return_item(deps: &ServiceDependencies, cmd: ReturnItem) -> Result<Loan> {
    let today = deps.clock.today();

    let mut loans = deps
        .loan_repository
        .load_all()
        .await
        .map_err(LendingError::LoanRepositoryError)?;

    let position = loans
        .iter()
        .position(|l| l.loan_id == cmd.loan_id)
        .ok_or(LendingError::LoanNotFound)?;

    if loan::is_returned(&loans[position]) {
        return Err(LendingError::AlreadyReturned);
    }

    // 1. 延滞日数を計算し、先に罰金を記録する
    let days = loan::overdue_days(&loans[position], today);
    fines::record_fine(
        deps,
        RecordFine {
            user_id: loans[position].user_id,
            category: loans[position].category,
            overdue_days: days,
        },
    )
    .await?;

    // 2. ドメイン層の純粋関数で返却を記録
    let returned = loan::return_loan(&loans[position], today).map_err(|e| match e {
        ReturnLoanError::AlreadyReturned => LendingError::AlreadyReturned,
    })?;

    // 3. スナップショット全体を書き換え
    let item_id = returned.item_id;
    loans[position] = returned.clone();
    deps.loan_repository
        .save_all(loans)
        .await
        .map_err(LendingError::LoanRepositoryError)?;

    // 4. borrowedフラグを解除
    deps.catalog
        .set_borrowed(item_id, false)
        .await
        .map_err(LendingError::CatalogError)?;

    tracing::info!(
        loan_id = %returned.loan_id.value(),
        overdue_days = days,
        "item returned"
    );

    Ok(returned)
}
