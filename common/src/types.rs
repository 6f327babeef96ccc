//! メニューの型定義
//!
//! 取得元・保存先・表示層で共有される型:
//! - MenuItem: メニュー1品（読み込み後は不変）
//! - Section: カテゴリ単位でまとめた表示用グループ

use serde::{Deserialize, Serialize};

/// メニュー1品
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    /// 一意なID
    pub id: String,

    /// 品名
    pub title: String,

    /// 価格（文字列のまま保持し、数値検証はしない）
    pub price: String,

    /// カテゴリ名
    pub category: String,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: price.into(),
            category: category.into(),
        }
    }
}

/// カテゴリ別セクション
///
/// `data` は元リストでの出現順を保つ。グループ化のたびに作り直され、
/// その場で書き換えられることはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// カテゴリ名
    pub title: String,
    pub data: Vec<MenuItem>,
}

impl Section {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
