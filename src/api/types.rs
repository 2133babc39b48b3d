use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::commands::{BorrowItem, RegisterUser};
use crate::domain::loan::Loan;
use crate::domain::user::User;
use crate::domain::value_objects::{ItemId, MediaCategory, Role, UserId};

/// 貸出リクエスト（POST /loans）
#[derive(Debug, Deserialize)]
pub struct BorrowRequest {
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub category: MediaCategory,
}

impl BorrowRequest {
    pub fn to_command(&self) -> BorrowItem {
        BorrowItem {
            user_id: UserId::from_uuid(self.user_id),
            item_id: ItemId::from_uuid(self.item_id),
            category: self.category,
        }
    }
}

/// 貸出レスポンス
#[derive(Debug, Serialize)]
pub struct LoanResponse {
    pub loan_id: Uuid,
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub category: String,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        Self {
            loan_id: loan.loan_id.value(),
            user_id: loan.user_id.value(),
            item_id: loan.item_id.value(),
            category: loan.category.as_str().to_string(),
            borrow_date: loan.borrow_date,
            due_date: loan.due_date,
            return_date: loan.return_date,
        }
    }
}

/// 利用者登録リクエスト（POST /users）
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// 省略時はMember
    pub role: Option<Role>,
}

impl RegisterUserRequest {
    pub fn to_command(&self) -> RegisterUser {
        RegisterUser {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role.unwrap_or(Role::Member),
        }
    }
}

/// 利用者レスポンス（パスワードは返さない）
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id.value(),
            name: user.name,
            email: user.email,
            role: user.role.as_str().to_string(),
        }
    }
}

/// 未払い残高レスポンス（GET /users/:id/balance）
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub user_id: Uuid,
    pub balance: f64,
}

/// 督促バッチレスポンス（POST /reminders）
#[derive(Debug, Serialize)]
pub struct RemindersResponse {
    pub sent: usize,
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
