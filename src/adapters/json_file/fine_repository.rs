use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::fine::Fine;
use crate::ports::fine_repository::{FineRepository as FineRepositoryTrait, Result};

use super::snapshot::{read_snapshot, write_snapshot};

/// FineRepositoryのJSONファイル実装
pub struct FineRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FineRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("fines.json"),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl FineRepositoryTrait for FineRepository {
    async fn load_all(&self) -> Result<Vec<Fine>> {
        let _guard = self.lock.lock().await;
        read_snapshot(&self.path).await
    }

    async fn save_all(&self, fines: Vec<Fine>) -> Result<()> {
        let _guard = self.lock.lock().await;
        write_snapshot(&self.path, &fines).await
    }
}
