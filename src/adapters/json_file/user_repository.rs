use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::user::User;
use crate::ports::user_repository::{Result, UserRepository as UserRepositoryTrait};

use super::snapshot::{read_snapshot, write_snapshot};

/// UserRepositoryのJSONファイル実装
pub struct UserRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl UserRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("users.json"),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn load_all(&self) -> Result<Vec<User>> {
        let _guard = self.lock.lock().await;
        read_snapshot(&self.path).await
    }

    async fn save_all(&self, users: Vec<User>) -> Result<()> {
        let _guard = self.lock.lock().await;
        write_snapshot(&self.path, &users).await
    }
}
