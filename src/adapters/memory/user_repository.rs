use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::user::User;
use crate::ports::user_repository::{Result, UserRepository as UserRepositoryTrait};

/// UserRepositoryのインメモリ実装
pub struct UserRepository {
    users: Mutex<Vec<User>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// テスト用に利用者を直接追加する
    pub fn seed(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    /// 現在の利用者一覧を取得する（検証用）
    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn load_all(&self) -> Result<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn save_all(&self, users: Vec<User>) -> Result<()> {
        *self.users.lock().unwrap() = users;
        Ok(())
    }
}
