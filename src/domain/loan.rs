use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{ItemId, LoanId, MediaCategory, ReturnLoanError, UserId};

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// 貸出記録 - 1点の資料の1回の貸出
///
/// 貸出は履歴であり削除されない。可変なのはreturn_dateのみで、
/// 一度設定されたら二度とクリアされない（貸出の再開はしない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    // 識別子
    pub loan_id: LoanId,

    // 他のコンテキストへの参照（IDのみ）
    pub user_id: UserId,
    pub item_id: ItemId,

    // 貸出管理の責務
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub category: MediaCategory,
}

/// 純粋関数：資料を貸し出す
///
/// ビジネスルール：
/// - 貸出期間は14日間
/// - 返却日は未設定
///
/// 副作用なし。新しいLoanを返す。
pub fn create_loan(
    user_id: UserId,
    item_id: ItemId,
    category: MediaCategory,
    borrow_date: NaiveDate,
) -> Loan {
    Loan {
        loan_id: LoanId::new(),
        user_id,
        item_id,
        borrow_date,
        due_date: borrow_date + Duration::days(LOAN_PERIOD_DAYS),
        return_date: None,
        category,
    }
}

/// 純粋関数：返却済み判定
pub fn is_returned(loan: &Loan) -> bool {
    loan.return_date.is_some()
}

/// 純粋関数：延滞判定
///
/// 未返却かつ基準日が返却期限より厳密に後の場合のみ延滞。
/// 返却済みの貸出は基準日に関わらず延滞ではない。
pub fn is_overdue(loan: &Loan, as_of: NaiveDate) -> bool {
    !is_returned(loan) && as_of > loan.due_date
}

/// 純粋関数：延滞日数の計算
///
/// 返却期限から基準日までの日数。延滞していない場合は0にクランプされる。
/// 罰金計算への唯一の入力となる。
pub fn overdue_days(loan: &Loan, as_of: NaiveDate) -> i64 {
    if !is_overdue(loan, as_of) {
        return 0;
    }
    (as_of - loan.due_date).num_days()
}

/// 純粋関数：資料を返却する
///
/// ビジネスルール：
/// - 既に返却済みの貸出は返却不可
/// - 返却イベントの記録のみを行い、罰金は計算しない
///   （罰金の計算・永続化は、同じ延滞日数計算を使って
///   呼び出し側が返却の永続化より前に済ませる契約）
///
/// 副作用なし。返却日が設定された新しいLoanを返す。
pub fn return_loan(loan: &Loan, return_date: NaiveDate) -> Result<Loan, ReturnLoanError> {
    if is_returned(loan) {
        return Err(ReturnLoanError::AlreadyReturned);
    }

    Ok(Loan {
        return_date: Some(return_date),
        ..loan.clone()
    })
}
