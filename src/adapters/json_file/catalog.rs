use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::item::Item;
use crate::domain::value_objects::ItemId;
use crate::ports::catalog::{Catalog as CatalogTrait, Result};

use super::snapshot::{read_snapshot, write_snapshot};

/// CatalogのJSONファイル実装
///
/// items.jsonを蔵書スナップショットとして扱う。
/// set_borrowedは読み込み・変更・書き換えを自身のロックの下で行う。
pub struct Catalog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl Catalog {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("items.json"),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl CatalogTrait for Catalog {
    async fn find_item(&self, item_id: ItemId) -> Result<Option<Item>> {
        let _guard = self.lock.lock().await;
        let items: Vec<Item> = read_snapshot(&self.path).await?;
        Ok(items.into_iter().find(|i| i.item_id() == item_id))
    }

    async fn set_borrowed(&self, item_id: ItemId, borrowed: bool) -> Result<()> {
        let _guard = self.lock.lock().await;
        let items: Vec<Item> = read_snapshot(&self.path).await?;

        let mut found = false;
        let updated: Vec<Item> = items
            .into_iter()
            .map(|item| {
                if item.item_id() == item_id {
                    found = true;
                    item.with_borrowed(borrowed)
                } else {
                    item
                }
            })
            .collect();

        if !found {
            return Err(format!("Item {} not found in catalog", item_id.value()).into());
        }

        write_snapshot(&self.path, &updated).await
    }
}
