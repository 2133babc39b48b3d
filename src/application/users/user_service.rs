use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::commands::{RegisterUser, UnregisterUser};
use crate::domain::user::User;
use crate::domain::value_objects::UserId;

use super::super::{ServiceDependencies, fines, lending};
use super::errors::{Result, UserError};

/// メールアドレスの形式
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("valid email regex"));

/// パスワードに要求する特殊文字
const PASSWORD_SPECIAL_CHARS: &str = "@#$%^&+=!";

/// パスワードポリシーの検証
///
/// 8文字以上で、大文字・小文字・数字・特殊文字を各1つ以上含むこと。
fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

/// 利用者を登録する
///
/// バリデーション（失敗時は状態を変更せず即座に中断）：
/// - メールアドレスの形式
/// - パスワードポリシー
/// - メールアドレスの重複（大文字小文字を区別しない）
pub async fn register(deps: &ServiceDependencies, cmd: RegisterUser) -> Result<User> {
    if !EMAIL_PATTERN.is_match(&cmd.email) {
        return Err(UserError::InvalidEmail);
    }

    if !is_valid_password(&cmd.password) {
        return Err(UserError::InvalidPassword);
    }

    let mut users = deps
        .user_repository
        .load_all()
        .await
        .map_err(UserError::UserRepositoryError)?;

    let exists = users
        .iter()
        .any(|u| u.email.eq_ignore_ascii_case(&cmd.email));
    if exists {
        return Err(UserError::EmailAlreadyRegistered);
    }

    let user = User {
        user_id: UserId::new(),
        name: cmd.name,
        email: cmd.email,
        password: cmd.password,
        role: cmd.role,
    };

    users.push(user.clone());
    deps.user_repository
        .save_all(users)
        .await
        .map_err(UserError::UserRepositoryError)?;

    tracing::info!(user_id = %user.user_id.value(), role = user.role.as_str(), "user registered");

    Ok(user)
}

/// 資格情報による利用者の検索
///
/// メールアドレスは大文字小文字を区別せず、パスワードは完全一致。
/// 一致しなければ`None`（セッション管理はこのコアの責務外）。
pub async fn authenticate(
    deps: &ServiceDependencies,
    email: &str,
    password: &str,
) -> Result<Option<User>> {
    let users = deps
        .user_repository
        .load_all()
        .await
        .map_err(UserError::UserRepositoryError)?;

    Ok(users
        .into_iter()
        .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password))
}

/// IDで利用者を検索する
pub async fn find_user(deps: &ServiceDependencies, user_id: UserId) -> Result<Option<User>> {
    let users = deps
        .user_repository
        .load_all()
        .await
        .map_err(UserError::UserRepositoryError)?;

    Ok(users.into_iter().find(|u| u.user_id == user_id))
}

/// 利用者を登録抹消する
///
/// ポリシーゲート（この順で判定する。順序は利用者向けメッセージに影響する）：
/// 1. 未返却の貸出がないこと
/// 2. 未払いの罰金がないこと
///
/// ゲート通過後、利用者を削除する。存在しないIDは`UserNotFound`
/// （ポリシー違反とは区別して返す）。
pub async fn unregister(deps: &ServiceDependencies, cmd: UnregisterUser) -> Result<()> {
    if lending::has_active_loans(deps, cmd.user_id)
        .await
        .map_err(|e| UserError::LendingError(Box::new(e)))?
    {
        return Err(UserError::HasActiveLoans);
    }

    let balance = fines::outstanding_balance(deps, cmd.user_id)
        .await
        .map_err(|e| UserError::FineError(Box::new(e)))?;
    if balance > 0.0 {
        return Err(UserError::HasUnpaidFines);
    }

    let mut users = deps
        .user_repository
        .load_all()
        .await
        .map_err(UserError::UserRepositoryError)?;

    let before = users.len();
    users.retain(|u| u.user_id != cmd.user_id);
    if users.len() == before {
        return Err(UserError::UserNotFound);
    }

    deps.user_repository
        .save_all(users)
        .await
        .map_err(UserError::UserRepositoryError)?;

    tracing::info!(user_id = %cmd.user_id.value(), "user unregistered");

    Ok(())
}
