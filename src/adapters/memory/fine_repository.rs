use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::fine::Fine;
use crate::ports::fine_repository::{FineRepository as FineRepositoryTrait, Result};

/// FineRepositoryのインメモリ実装
pub struct FineRepository {
    fines: Mutex<Vec<Fine>>,
}

impl FineRepository {
    pub fn new() -> Self {
        Self {
            fines: Mutex::new(Vec::new()),
        }
    }

    /// テスト用に罰金記録を直接追加する
    pub fn seed(&self, fine: Fine) {
        self.fines.lock().unwrap().push(fine);
    }

    /// 現在の罰金記録を取得する（検証用）
    pub fn all(&self) -> Vec<Fine> {
        self.fines.lock().unwrap().clone()
    }
}

impl Default for FineRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FineRepositoryTrait for FineRepository {
    async fn load_all(&self) -> Result<Vec<Fine>> {
        Ok(self.fines.lock().unwrap().clone())
    }

    async fn save_all(&self, fines: Vec<Fine>) -> Result<()> {
        *self.fines.lock().unwrap() = fines;
        Ok(())
    }
}
