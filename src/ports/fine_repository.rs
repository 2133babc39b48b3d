use crate::domain::fine::Fine;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 罰金リポジトリポート
///
/// 全件スナップショット方式の永続化を抽象化する。
/// 支払済みの罰金も履歴として保持され、削除はしない。
#[async_trait]
pub trait FineRepository: Send + Sync {
    /// すべての罰金記録を読み込む
    async fn load_all(&self) -> Result<Vec<Fine>>;

    /// すべての罰金記録を書き換える
    ///
    /// コレクション全体を置き換える。全部成功するか、何も変わらないか。
    async fn save_all(&self, fines: Vec<Fine>) -> Result<()>;
}
