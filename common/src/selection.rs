//! カテゴリ選択状態
//!
//! カテゴリ名 → 表示対象フラグの順序付きマップ。
//! キーは直近に読み込んだカタログのカテゴリと完全に一致し、
//! 更新は常に新しい値を返す（共有中の状態を書き換えない）。

use crate::types::MenuItem;
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    categories: IndexMap<String, bool>,
}

impl Selection {
    /// カタログに現れる全カテゴリを初出順に登録し、すべて表示対象にする
    pub fn derive_initial<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a MenuItem>,
    {
        let mut categories = IndexMap::new();
        for item in items {
            categories.entry(item.category.clone()).or_insert(true);
        }
        Self { categories }
    }

    /// 1カテゴリだけフラグを反転した新しい状態を返す
    ///
    /// 未登録のカテゴリは無視し、同じ内容の状態を返す。
    pub fn toggle(&self, category: &str) -> Self {
        let mut next = self.clone();
        if let Some(flag) = next.categories.get_mut(category) {
            *flag = !*flag;
        }
        next
    }

    /// 1カテゴリのフラグを指定値にした新しい状態を返す（未登録なら無視）
    pub fn with(&self, category: &str, included: bool) -> Self {
        let mut next = self.clone();
        if let Some(flag) = next.categories.get_mut(category) {
            *flag = included;
        }
        next
    }

    /// 表示対象か（未登録のカテゴリは対象外）
    pub fn is_included(&self, category: &str) -> bool {
        self.categories.get(category).copied().unwrap_or(false)
    }

    pub fn get(&self, category: &str) -> Option<bool> {
        self.categories.get(category).copied()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// (カテゴリ名, フラグ) を登録順に返す
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(|k| k.as_str())
    }

    pub fn included(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, on)| *on).map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
