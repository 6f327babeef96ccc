//! Menu Browser Common Library
//!
//! 取得・保存の方式に依存しない型と純粋関数:
//! カテゴリ別グループ化、検索・カテゴリフィルタ、選択状態、
//! レスポンスパーサー、同梱デフォルトメニュー

pub mod types;
pub mod error;
pub mod parser;
pub mod group;
pub mod filter;
pub mod selection;
pub mod defaults;

pub use types::{MenuItem, Section};
pub use error::{Error, Result};
pub use parser::{extract_json, parse_menu_response, UNCATEGORIZED};
pub use group::{flatten, group};
pub use filter::{filter, matches, title_contains};
pub use selection::Selection;
pub use defaults::default_menu;
