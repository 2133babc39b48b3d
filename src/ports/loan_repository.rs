use crate::domain::loan::Loan;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出リポジトリポート
///
/// 全件スナップショット方式の永続化を抽象化する。
/// 部分更新はなく、保存は常にコレクション全体の書き換え。
/// インメモリ・ファイル・データベースの各実装を差し替え可能にする。
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// すべての貸出記録を読み込む
    ///
    /// 永続化されたスナップショット全体を返す。
    async fn load_all(&self) -> Result<Vec<Loan>>;

    /// すべての貸出記録を書き換える
    ///
    /// コレクション全体を置き換える。全部成功するか、何も変わらないか。
    async fn save_all(&self, loans: Vec<Loan>) -> Result<()>;
}
