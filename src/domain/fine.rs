use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{FineCalculationError, FineId, MediaCategory, UserId};

/// 書籍の固定罰金額
pub const BOOK_FINE_AMOUNT: f64 = 10.0;

/// CDの固定罰金額（紛失リスクが高いため書籍より高額）
pub const CD_FINE_AMOUNT: f64 = 20.0;

/// 罰金記録
///
/// 不変条件：amountは非負。利用者の未払い残高は
/// paid = false の罰金のamountの合計。
/// 支払済みの罰金も履歴として残り、黙って削除されることはない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fine {
    pub fine_id: FineId,
    pub user_id: UserId,
    pub amount: f64,
    pub paid: bool,
}

impl Fine {
    /// 未払いの罰金を新規作成する
    pub fn unpaid(user_id: UserId, amount: f64) -> Self {
        Self {
            fine_id: FineId::new(),
            user_id,
            amount,
            paid: false,
        }
    }
}

/// 罰金戦略 - 延滞日数から罰金額を求める純粋関数
///
/// ポリシー：延滞日数が0以下なら必ず0.0。延滞していれば区分ごとの
/// **固定額**を返す（日数に比例しない）。この定額制は意図的な
/// 単純化であり、明示的な要求なしに日割りへ一般化してはならない。
pub type FineStrategy = fn(i64) -> f64;

/// 純粋関数：書籍の罰金戦略
pub fn book_fine_strategy(overdue_days: i64) -> f64 {
    if overdue_days <= 0 {
        return 0.0;
    }
    BOOK_FINE_AMOUNT
}

/// 純粋関数：CDの罰金戦略
pub fn cd_fine_strategy(overdue_days: i64) -> f64 {
    if overdue_days <= 0 {
        return 0.0;
    }
    CD_FINE_AMOUNT
}

/// 罰金計算機
///
/// メディア区分から罰金戦略へのディスパッチテーブル。
/// 戦略の登録は構築時に固定され、実行時の再登録はない。
#[derive(Debug, Clone)]
pub struct FineCalculator {
    strategies: HashMap<MediaCategory, FineStrategy>,
}

impl FineCalculator {
    /// 対応するすべてのメディア区分の戦略を登録して構築する
    pub fn new() -> Self {
        let mut strategies: HashMap<MediaCategory, FineStrategy> = HashMap::new();
        strategies.insert(MediaCategory::Book, book_fine_strategy);
        strategies.insert(MediaCategory::Cd, cd_fine_strategy);
        Self { strategies }
    }

    /// 区分と延滞日数から罰金額を計算する
    ///
    /// # エラー
    /// 区分に戦略が登録されていない場合は
    /// `FineCalculationError::UnsupportedCategory`を返す
    pub fn calculate(
        &self,
        category: MediaCategory,
        overdue_days: i64,
    ) -> Result<f64, FineCalculationError> {
        let strategy = self
            .strategies
            .get(&category)
            .ok_or(FineCalculationError::UnsupportedCategory(category))?;
        Ok(strategy(overdue_days))
    }
}

impl Default for FineCalculator {
    fn default() -> Self {
        Self::new()
    }
}
