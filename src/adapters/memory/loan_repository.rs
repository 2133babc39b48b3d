use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::loan::Loan;
use crate::ports::loan_repository::{LoanRepository as LoanRepositoryTrait, Result};

/// LoanRepositoryのインメモリ実装
///
/// Mutexで守られたVecをスナップショットとして扱う。
/// テスト用に直接シードすることもできる。
pub struct LoanRepository {
    loans: Mutex<Vec<Loan>>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self {
            loans: Mutex::new(Vec::new()),
        }
    }

    /// テスト用に貸出記録を直接追加する
    pub fn seed(&self, loan: Loan) {
        self.loans.lock().unwrap().push(loan);
    }

    /// 現在の貸出記録を取得する（検証用）
    pub fn all(&self) -> Vec<Loan> {
        self.loans.lock().unwrap().clone()
    }
}

impl Default for LoanRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    async fn load_all(&self) -> Result<Vec<Loan>> {
        Ok(self.loans.lock().unwrap().clone())
    }

    async fn save_all(&self, loans: Vec<Loan>) -> Result<()> {
        *self.loans.lock().unwrap() = loans;
        Ok(())
    }
}
