use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::loan::Loan;
use crate::ports::loan_repository::{LoanRepository as LoanRepositoryTrait, Result};

use super::snapshot::{read_snapshot, write_snapshot};

/// LoanRepositoryのJSONファイル実装
///
/// loans.json全体を読み込み・書き換えするスナップショット永続化。
/// Mutexは個々のload/saveの一貫性のみを守る。読み込み〜書き換えの
/// サイクル全体の直列化は呼び出し側の責務（APIレイヤーの書き込みロック）。
pub struct LoanRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LoanRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("loans.json"),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    async fn load_all(&self) -> Result<Vec<Loan>> {
        let _guard = self.lock.lock().await;
        read_snapshot(&self.path).await
    }

    async fn save_all(&self, loans: Vec<Loan>) -> Result<()> {
        let _guard = self.lock.lock().await;
        write_snapshot(&self.path, &loans).await
    }
}
