//! メニューレスポンスパーサー
//!
//! リモートから取得した本文からJSONを抽出し、MenuItem列に変換する。
//!
//! 受け付ける形式:
//! - `{"menu": [...]}` エンベロープ、または生の `[...]` 配列
//! - `category` は文字列か `{"title": "..."}`
//! - `id`・`price` は文字列でも数値でもよい（価格は文字列として保持）

use crate::error::{Error, Result};
use crate::types::MenuItem;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// カテゴリが無い品目に割り当てるカテゴリ名
pub const UNCATEGORIZED: &str = "Other";

/// レスポンス本文からJSON部分を抽出
///
/// 抽出優先順位:
/// 1. 本文全体が `{` か `[` で始まる
/// 2. 最初の `{`/`[` から最後の `}`/`]` まで（JSONPなどのラッパーを剥がす）
///
/// # Examples
/// ```
/// use menu_browser_common::extract_json;
///
/// let body = "callback({\"menu\": []})";
/// let json = extract_json(body).unwrap();
/// assert_eq!(json, "{\"menu\": []}");
/// ```
pub fn extract_json(body: &str) -> Result<&str> {
    let trimmed = body.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Ok(trimmed);
    }

    let start = trimmed.find(|c: char| c == '{' || c == '[');
    let end = trimmed.rfind(|c: char| c == '}' || c == ']');
    match (start, end) {
        (Some(start), Some(end)) if end > start => Ok(&trimmed[start..=end]),
        _ => Err(Error::Parse("JSONが見つかりません".into())),
    }
}

/// 文字列か数値の値をそのままの表記で取り出す
///
/// 数値は `arbitrary_precision` により元の表記（`7.00` など）を保つ。
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `"Salads"` または `{"title": "Salads"}` からカテゴリ名を取り出す
fn category_name(value: &Value) -> Option<&str> {
    let name = match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(obj) => obj.get("title").and_then(Value::as_str),
        _ => None,
    };
    name.filter(|name| !name.is_empty())
}

fn menu_entries(payload: Value) -> Result<Vec<Value>> {
    match payload {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut obj) => match obj.remove("menu") {
            Some(Value::Array(entries)) => Ok(entries),
            _ => Err(Error::Parse("menu 配列が見つかりません".into())),
        },
        _ => Err(Error::Parse("メニューはオブジェクトか配列である必要があります".into())),
    }
}

fn to_menu_item(pos: usize, fields: &Map<String, Value>) -> Option<MenuItem> {
    let title = fields
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())?;

    Some(MenuItem {
        id: fields
            .get("id")
            .and_then(scalar_text)
            .unwrap_or_else(|| (pos + 1).to_string()),
        title: title.to_string(),
        price: fields.get("price").and_then(scalar_text).unwrap_or_default(),
        category: fields
            .get("category")
            .and_then(category_name)
            .unwrap_or(UNCATEGORIZED)
            .to_string(),
    })
}

/// メニューレスポンスをパース
///
/// - IDが無い品目は出現位置（1始まり）をIDにする
/// - 品名が無い・空・`null` の品目は捨てる
/// - 同じIDが複数ある場合は最初の品目を残す
pub fn parse_menu_response(body: &str) -> Result<Vec<MenuItem>> {
    let json_str = extract_json(body)?;
    let payload: Value = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("メニューJSONパースエラー: {}", e)))?;

    let mut seen = HashSet::new();
    let items = menu_entries(payload)?
        .iter()
        .enumerate()
        .filter_map(|(pos, entry)| entry.as_object().and_then(|fields| to_menu_item(pos, fields)))
        .filter(|item| seen.insert(item.id.clone()))
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // extract_json テスト
    // =============================================

    #[test]
    fn test_extract_json_object() {
        let body = r#"  {"menu": []}  "#;
        assert_eq!(extract_json(body).unwrap(), r#"{"menu": []}"#);
    }

    #[test]
    fn test_extract_json_with_surrounding_text() {
        let body = r#"jsonp({"menu": [{"title": "Beer"}]});"#;
        let json = extract_json(body).unwrap();
        assert_eq!(json, r#"{"menu": [{"title": "Beer"}]}"#);
    }

    #[test]
    fn test_extract_json_not_found() {
        assert!(extract_json("<html>502 Bad Gateway</html>").is_err());
        assert!(extract_json("").is_err());
    }

    // =============================================
    // parse_menu_response テスト
    // =============================================

    #[test]
    fn test_parse_envelope_with_titled_category() {
        let body = r#"{
          "menu": [
            {"id": 1, "title": "Spinach Artichoke Dip", "price": "10", "category": {"title": "Appetizers"}},
            {"id": 2, "title": "Hummus", "price": "10", "category": {"title": "Appetizers"}},
            {"id": 3, "title": "Greek Salad", "price": "7", "category": {"title": "Salads"}}
          ]
        }"#;

        let items = parse_menu_response(body).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], MenuItem::new("1", "Spinach Artichoke Dip", "10", "Appetizers"));
        assert_eq!(items[2].category, "Salads");
    }

    #[test]
    fn test_parse_bare_array_with_plain_category() {
        let body = r#"[{"id": "w", "title": "Water", "price": 2.5, "category": "Beverages"}]"#;

        let items = parse_menu_response(body).unwrap();
        assert_eq!(items, vec![MenuItem::new("w", "Water", "2.5", "Beverages")]);
    }

    #[test]
    fn test_parse_missing_fields_get_defaults() {
        let body = r#"[{"title": "Mystery"}, {"title": "Bread", "category": ""}]"#;

        let items = parse_menu_response(body).unwrap();
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].price, "");
        assert_eq!(items[0].category, UNCATEGORIZED);
        assert_eq!(items[1].id, "2");
        assert_eq!(items[1].category, UNCATEGORIZED);
    }

    #[test]
    fn test_parse_drops_untitled_and_duplicate_ids() {
        let body = r#"[
            {"id": 1, "title": "Falafel", "category": "Appetizers"},
            {"id": 2, "title": "   ", "category": "Appetizers"},
            {"id": 1, "title": "Falafel again", "category": "Appetizers"}
        ]"#;

        let items = parse_menu_response(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Falafel");
    }

    #[test]
    fn test_parse_null_title_is_dropped_not_fatal() {
        let body = r#"{"menu": [
            {"id": 1, "title": "Hummus", "price": "10", "category": {"title": "Appetizers"}},
            {"id": 2, "title": null, "price": "5", "category": {"title": "Appetizers"}},
            {"id": 3, "title": "Greek Salad", "price": "7", "category": {"title": "Salads"}}
        ]}"#;

        let items = parse_menu_response(body).unwrap();
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Hummus", "Greek Salad"]);
    }

    #[test]
    fn test_parse_null_category_title_falls_back() {
        let body = r#"[
            {"id": 1, "title": "Bread", "category": {"title": null}},
            {"id": 2, "title": "Soup", "category": null},
            {"id": 3, "title": "Pie", "category": {}}
        ]"#;

        let items = parse_menu_response(body).unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.category == UNCATEGORIZED));
    }

    #[test]
    fn test_parse_numeric_price_keeps_its_text() {
        let body = r#"[
            {"id": 1, "title": "Lemon Cake", "price": 10.50, "category": "Desserts"},
            {"id": 2, "title": "Greek Salad", "price": 7.00, "category": "Salads"},
            {"id": 3, "title": "Water", "price": 2, "category": "Beverages"}
        ]"#;

        let items = parse_menu_response(body).unwrap();
        let prices: Vec<_> = items.iter().map(|i| i.price.as_str()).collect();
        assert_eq!(prices, vec!["10.50", "7.00", "2"]);
        assert_eq!(items[0].id, "1");
    }

    #[test]
    fn test_parse_skips_non_object_entries() {
        let items = parse_menu_response(r#"[42, "x", {"title": "Tea"}]"#).unwrap();
        assert_eq!(items, vec![MenuItem::new("3", "Tea", "", UNCATEGORIZED)]);
    }

    #[test]
    fn test_parse_invalid_shape() {
        let result = parse_menu_response(r#"{"dishes": 3}"#);
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
