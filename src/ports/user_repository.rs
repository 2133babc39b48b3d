use crate::domain::user::User;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 利用者リポジトリポート
///
/// 全件スナップショット方式の永続化を抽象化する。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// すべての利用者を読み込む
    async fn load_all(&self) -> Result<Vec<User>>;

    /// すべての利用者を書き換える
    ///
    /// コレクション全体を置き換える。全部成功するか、何も変わらないか。
    async fn save_all(&self, users: Vec<User>) -> Result<()>;
}
