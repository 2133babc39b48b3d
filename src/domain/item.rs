use serde::{Deserialize, Serialize};

use super::{ItemId, MediaCategory};

/// 書籍
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub item_id: ItemId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub borrowed: bool,
}

/// CD
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cd {
    pub item_id: ItemId,
    pub title: String,
    pub artist: String,
    pub borrowed: bool,
}

/// 貸出可能な資料の統合型
///
/// 不変の識別情報（ID・タイトル・区分固有の記述子）と、
/// 可変なborrowedフラグだけを持つ。
///
/// 不変条件：borrowedがtrue ⇔ 返却日のない貸出記録が存在する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Book(Book),
    Cd(Cd),
}

impl Item {
    pub fn item_id(&self) -> ItemId {
        match self {
            Item::Book(b) => b.item_id,
            Item::Cd(c) => c.item_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Item::Book(b) => &b.title,
            Item::Cd(c) => &c.title,
        }
    }

    pub fn category(&self) -> MediaCategory {
        match self {
            Item::Book(_) => MediaCategory::Book,
            Item::Cd(_) => MediaCategory::Cd,
        }
    }

    pub fn is_borrowed(&self) -> bool {
        match self {
            Item::Book(b) => b.borrowed,
            Item::Cd(c) => c.borrowed,
        }
    }

    /// borrowedフラグを差し替えた新しいItemを返す
    pub fn with_borrowed(&self, borrowed: bool) -> Item {
        match self {
            Item::Book(b) => Item::Book(Book {
                borrowed,
                ..b.clone()
            }),
            Item::Cd(c) => Item::Cd(Cd {
                borrowed,
                ..c.clone()
            }),
        }
    }
}
