use crate::domain::item::Item;
use crate::domain::value_objects::ItemId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// カタログポート
///
/// 貸出コンテキストと蔵書カタログコンテキストの境界を維持する。
/// 貸出コンテキストが必要とするのは存在確認とborrowedフラグの反転のみ。
#[async_trait]
pub trait Catalog: Send + Sync {
    /// IDで資料を検索する
    ///
    /// 見つからない場合は`None`を返す。
    async fn find_item(&self, item_id: ItemId) -> Result<Option<Item>>;

    /// 資料のborrowedフラグを設定する
    ///
    /// 貸出作成・返却処理と対になって呼ばれる。
    async fn set_borrowed(&self, item_id: ItemId, borrowed: bool) -> Result<()>;
}
