//! 同梱のデフォルトメニュー
//!
//! リモート取得もローカル保存も使えないときの最終段。
//! 常に空でない固定リストを返す。

use crate::types::MenuItem;

const DEFAULT_MENU: &[(&str, &str, &str, &str)] = &[
    ("1", "Hummus", "5.00", "Appetizers"),
    ("2", "Moutabal", "5.00", "Appetizers"),
    ("3", "Falafel", "7.50", "Appetizers"),
    ("4", "Marinated Olives", "5.00", "Appetizers"),
    ("5", "Kofta", "5.00", "Appetizers"),
    ("6", "Eggplant Salad", "8.50", "Appetizers"),
    ("7", "Lentil Burger", "10.00", "Main Dishes"),
    ("8", "Smoked Salmon", "14.00", "Main Dishes"),
    ("9", "Kofta Burger", "11.00", "Main Dishes"),
    ("10", "Turkish Kebab", "15.50", "Main Dishes"),
    ("11", "Greek Salad", "12.99", "Salads"),
    ("12", "Fattoush", "9.50", "Salads"),
    ("13", "Tabouleh", "8.00", "Salads"),
    ("14", "Water", "3.00", "Beverages"),
    ("15", "Coke", "3.00", "Beverages"),
    ("16", "Beer", "7.00", "Beverages"),
    ("17", "Iced Tea", "3.00", "Beverages"),
    ("18", "Baklava", "6.00", "Desserts"),
    ("19", "Tiramisu", "7.50", "Desserts"),
    ("20", "Panna Cotta", "6.50", "Desserts"),
];

/// デフォルトメニューを返す
pub fn default_menu() -> Vec<MenuItem> {
    DEFAULT_MENU
        .iter()
        .map(|&(id, title, price, category)| MenuItem::new(id, title, price, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_menu_non_empty() {
        let items = default_menu();
        assert!(items.len() >= 4);

        let categories: HashSet<&str> = items.iter().map(|i| i.category.as_str()).collect();
        assert!(categories.len() >= 2);
    }

    #[test]
    fn test_default_menu_unique_ids() {
        let items = default_menu();
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }
}
