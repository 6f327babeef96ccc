//! カテゴリ別グループ化
//!
//! 平坦なMenuItem列をカテゴリごとのSectionに変換する。
//! セクション順はカテゴリの初出順（アルファベット順ではない）、
//! セクション内の順序は入力での相対順を保つ。

use crate::types::{MenuItem, Section};
use std::collections::HashMap;

/// MenuItem列をカテゴリ初出順のSection列にまとめる
///
/// 1回の走査で、カテゴリ名 → セクション位置のマップを育てながら振り分ける。
pub fn group<'a, I>(items: I) -> Vec<Section>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let mut sections: Vec<Section> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for item in items {
        match index.get(item.category.as_str()) {
            Some(&pos) => sections[pos].data.push(item.clone()),
            None => {
                index.insert(item.category.as_str(), sections.len());
                sections.push(Section {
                    title: item.category.clone(),
                    data: vec![item.clone()],
                });
            }
        }
    }

    sections
}

/// Section列を平坦なMenuItem列に戻す
pub fn flatten(sections: &[Section]) -> Vec<MenuItem> {
    sections
        .iter()
        .flat_map(|s| s.data.iter().cloned())
        .collect()
}
