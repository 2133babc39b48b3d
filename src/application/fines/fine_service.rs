use crate::domain::commands::{PayFine, RecordFine};
use crate::domain::errors::FineCalculationError;
use crate::domain::fine::Fine;
use crate::domain::value_objects::{FineId, UserId};

use super::super::ServiceDependencies;
use super::errors::{FineError, Result};

/// 利用者の未払い残高を取得する（副作用なし）
///
/// その利用者のpaid = falseな罰金のamountの合計を返す。
/// 罰金を1件も持たない利用者には0.0を返し、エラーにはしない。
pub async fn outstanding_balance(deps: &ServiceDependencies, user_id: UserId) -> Result<f64> {
    let fines = deps
        .fine_repository
        .load_all()
        .await
        .map_err(FineError::FineRepositoryError)?;

    Ok(fines
        .iter()
        .filter(|f| f.user_id == user_id && !f.paid)
        .map(|f| f.amount)
        .sum())
}

/// 罰金を記録する
///
/// ビジネスルール：
/// - 罰金額はFineCalculatorが区分ごとの戦略で決める
/// - 計算結果が0なら罰金記録は作成しない（額0の罰金は永続化しない）
/// - それ以外は未払いの罰金を1件追加する
///
/// # 戻り値
/// 作成された罰金のID。作成されなかった場合は`None`
pub async fn record_fine(deps: &ServiceDependencies, cmd: RecordFine) -> Result<Option<FineId>> {
    let amount = deps
        .fine_calculator
        .calculate(cmd.category, cmd.overdue_days)
        .map_err(|FineCalculationError::UnsupportedCategory(category)| {
            FineError::UnsupportedCategory(category)
        })?;

    if amount == 0.0 {
        return Ok(None);
    }

    let fine = Fine::unpaid(cmd.user_id, amount);
    let fine_id = fine.fine_id;

    let mut fines = deps
        .fine_repository
        .load_all()
        .await
        .map_err(FineError::FineRepositoryError)?;
    fines.push(fine);

    deps.fine_repository
        .save_all(fines)
        .await
        .map_err(FineError::FineRepositoryError)?;

    tracing::info!(
        fine_id = %fine_id.value(),
        user_id = %cmd.user_id.value(),
        amount,
        "fine recorded"
    );

    Ok(Some(fine_id))
}

/// 罰金を支払済みにする
///
/// ビジネスルール：
/// - 存在しないIDは`FineNotFound`
/// - 既に支払済みの罰金への支払いは冪等な無操作（エラーではない）
pub async fn pay_fine(deps: &ServiceDependencies, cmd: PayFine) -> Result<()> {
    let mut fines = deps
        .fine_repository
        .load_all()
        .await
        .map_err(FineError::FineRepositoryError)?;

    let fine = fines
        .iter_mut()
        .find(|f| f.fine_id == cmd.fine_id)
        .ok_or(FineError::FineNotFound)?;

    if fine.paid {
        // 冪等：既に支払済みなら何もしない
        return Ok(());
    }

    fine.paid = true;

    deps.fine_repository
        .save_all(fines)
        .await
        .map_err(FineError::FineRepositoryError)?;

    Ok(())
}
