use serde::{Deserialize, Serialize};

use super::{Role, UserId};

/// 利用者
///
/// 不変の識別情報（ID・名前・メールアドレス）とパスワード資格情報を持つ。
/// 貸出と罰金はuser_idによる逆参照で解決され、所有関係としては埋め込まない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
