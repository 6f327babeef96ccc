//! テキスト表示
//!
//! CLI用の簡易な表示。セクション見出しと「品名  $価格」の行を出す。

use menu_browser_common::{Section, Selection};
use std::fmt::Write;

/// セクション列を表示用テキストにする
pub fn render_sections(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "（該当するメニューはありません）\n".to_string();
    }

    let width = sections
        .iter()
        .flat_map(|s| s.data.iter())
        .map(|i| i.title.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (idx, section) in sections.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "## {}", section.title);
        for item in &section.data {
            let pad = width.saturating_sub(item.title.chars().count());
            let _ = writeln!(out, "  {}{}  {}", item.title, " ".repeat(pad), format_price(&item.price));
        }
    }
    out
}

/// カテゴリ一覧（件数と選択状態付き）
pub fn render_categories(sections: &[Section], selection: &Selection) -> String {
    let mut out = String::new();
    for section in sections {
        let mark = if selection.is_included(&section.title) { "x" } else { " " };
        let _ = writeln!(out, "[{}] {} ({})", mark, section.title, section.len());
    }
    out
}

/// 価格の表示。数値として読めなくてもそのまま出す
fn format_price(price: &str) -> String {
    let trimmed = price.trim();
    if trimmed.is_empty() {
        "-".to_string()
    } else if trimmed.starts_with('$') {
        trimmed.to_string()
    } else {
        format!("${}", trimmed)
    }
}
