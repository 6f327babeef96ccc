//! 検索・カテゴリフィルタ
//!
//! 品名の部分一致（大文字小文字を区別しない）と、カテゴリ選択状態の
//! 両方を満たす品目だけを残し、カテゴリ別に再グループ化する。

use crate::group::group;
use crate::selection::Selection;
use crate::types::{MenuItem, Section};

/// 品名に検索文字列が含まれるか（大文字小文字を区別しない）
///
/// 空の検索文字列はすべてに一致する。
pub fn title_contains(title: &str, search: &str) -> bool {
    search.is_empty() || title.to_lowercase().contains(&search.to_lowercase())
}

/// 品目がフィルタ条件を満たすか
///
/// カテゴリは大文字小文字を区別した完全一致。選択状態に無いカテゴリは除外。
pub fn matches(item: &MenuItem, search: &str, selection: &Selection) -> bool {
    selection.is_included(&item.category) && title_contains(&item.title, search)
}

/// カタログに検索文字列と選択状態を適用したSection列を返す
pub fn filter(items: &[MenuItem], search: &str, selection: &Selection) -> Vec<Section> {
    group(items.iter().filter(|item| matches(item, search, selection)))
}
