use serde::{Deserialize, Serialize};

use super::{FineId, ItemId, LoanId, MediaCategory, Role, UserId};

/// コマンド：資料を借りる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowItem {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub category: MediaCategory,
}

/// コマンド：資料を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnItem {
    pub loan_id: LoanId,
}

/// コマンド：罰金を記録する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFine {
    pub user_id: UserId,
    pub category: MediaCategory,
    pub overdue_days: i64,
}

/// コマンド：罰金を支払う
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayFine {
    pub fine_id: FineId,
}

/// コマンド：利用者を登録する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// コマンド：利用者を登録抹消する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnregisterUser {
    pub user_id: UserId,
}
