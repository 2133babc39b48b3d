use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::item::Item;
use crate::domain::value_objects::ItemId;
use crate::ports::catalog::{Catalog as CatalogTrait, Result};

/// Catalogのインメモリ実装
///
/// 資料を登録することで状態を持ったテストをサポートする。
pub struct Catalog {
    items: Mutex<HashMap<ItemId, Item>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
        }
    }

    /// テスト用に資料を登録する
    pub fn add_item(&self, item: Item) {
        self.items.lock().unwrap().insert(item.item_id(), item);
    }

    /// 現在の資料の状態を取得する（検証用）
    pub fn get_item(&self, item_id: ItemId) -> Option<Item> {
        self.items.lock().unwrap().get(&item_id).cloned()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogTrait for Catalog {
    async fn find_item(&self, item_id: ItemId) -> Result<Option<Item>> {
        Ok(self.items.lock().unwrap().get(&item_id).cloned())
    }

    async fn set_borrowed(&self, item_id: ItemId, borrowed: bool) -> Result<()> {
        let mut items = self.items.lock().unwrap();
        let item = items
            .get(&item_id)
            .ok_or_else(|| format!("Item {} not found in catalog", item_id.value()))?;
        let updated = item.with_borrowed(borrowed);
        items.insert(item_id, updated);
        Ok(())
    }
}
