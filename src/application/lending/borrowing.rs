use crate::domain::commands::BorrowItem;
use crate::domain::loan::{self, Loan};

use super::super::{ServiceDependencies, fines};
use super::errors::{LendingError, Result};
use super::queries::has_overdue_loans;

/// 資料を貸し出す - 貸出可否ゲート
///
/// ビジネスルール（判定順は利用者向けメッセージに影響するため固定）：
/// 1. 未払い残高が0より大きい利用者は借りられない（残高をエラーに載せる）
/// 2. 延滞中かつ未返却の貸出を持つ利用者は借りられない
///
/// 両方に該当する利用者には残高側の失敗を返す（先勝ちポリシー、
/// 判定順の入れ替えはプロダクト承認なしに行わないこと）。
/// 2つのゲートは区分（Book/CD）によらず一律に適用される。
///
/// ゲート通過後：カタログが資料の存在と貸出可能性を検証し、
/// 貸出記録の追加とborrowedフラグの反転を行う。呼び出し側から見て
/// 両方行われるか、どちらも行われないか。
///
/// # 戻り値
/// 成功時は作成された貸出記録
pub async fn borrow_item(deps: &ServiceDependencies, cmd: BorrowItem) -> Result<Loan> {
    // 1. 未払い残高ゲート
    let balance = fines::outstanding_balance(deps, cmd.user_id).await?;
    if balance > 0.0 {
        return Err(LendingError::UnpaidFines { balance });
    }

    // 2. 延滞貸出ゲート
    if has_overdue_loans(deps, cmd.user_id).await? {
        return Err(LendingError::OverdueLoans);
    }

    // 3. カタログによる資料の検証
    let item = deps
        .catalog
        .find_item(cmd.item_id)
        .await
        .map_err(LendingError::CatalogError)?
        .ok_or(LendingError::ItemNotFound)?;

    if item.is_borrowed() {
        return Err(LendingError::ItemNotAvailable);
    }

    // 4. ドメイン層の純粋関数で貸出を作成
    let new_loan = loan::create_loan(cmd.user_id, cmd.item_id, cmd.category, deps.clock.today());

    // 5. スナップショット全体を書き換え
    let mut loans = deps
        .loan_repository
        .load_all()
        .await
        .map_err(LendingError::LoanRepositoryError)?;
    loans.push(new_loan.clone());
    deps.loan_repository
        .save_all(loans)
        .await
        .map_err(LendingError::LoanRepositoryError)?;

    // 6. borrowedフラグを反転
    deps.catalog
        .set_borrowed(cmd.item_id, true)
        .await
        .map_err(LendingError::CatalogError)?;

    tracing::info!(
        loan_id = %new_loan.loan_id.value(),
        user_id = %cmd.user_id.value(),
        item_id = %cmd.item_id.value(),
        category = %cmd.category,
        due_date = %new_loan.due_date,
        "item borrowed"
    );

    Ok(new_loan)
}
