//! カタログ保存モジュール
//!
//! 取得したメニューをローカルに保存し、次回以降の読み込みに使う。
//! - JsonFileStore: バージョン・チェックサム付きJSONファイル（既定）
//! - SqliteStore: SQLiteデータベース
//! - NullStore: 保存先が使えない環境用（常に初期化失敗）

mod json;
mod sqlite;

pub use json::{CatalogFile, JsonFileStore, CATALOG_FILE_NAME};
pub use sqlite::{SqliteStore, DATABASE_FILE_NAME};

use crate::error::{MenuError, Result};
use clap::ValueEnum;
use menu_browser_common::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 保存方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Json,
    Sqlite,
    None,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Json => "json",
            StorageKind::Sqlite => "sqlite",
            StorageKind::None => "none",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 保存内容の概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub location: Option<PathBuf>,
    pub item_count: usize,
    pub saved_at: Option<String>,
}

/// メニューの保存先
///
/// `ensure_schema` は何度呼んでもよい。`read_items` は何も保存されて
/// いなければ空のVecを返す。
pub trait CatalogStore {
    fn ensure_schema(&mut self) -> Result<()>;

    /// 保存済みの内容を丸ごと置き換える
    fn write_items(&mut self, items: &[MenuItem]) -> Result<()>;

    fn read_items(&self) -> Result<Vec<MenuItem>>;

    fn info(&self) -> Result<StoreInfo>;

    /// 保存内容を削除（削除したらtrue）
    fn clear(&mut self) -> Result<bool>;
}

/// 保存先が使えない環境
#[derive(Debug, Clone)]
pub struct NullStore {
    reason: String,
}

impl NullStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl CatalogStore for NullStore {
    fn ensure_schema(&mut self) -> Result<()> {
        Err(MenuError::StoreInit(self.reason.clone()))
    }

    fn write_items(&mut self, _items: &[MenuItem]) -> Result<()> {
        Err(MenuError::StoreInit(self.reason.clone()))
    }

    fn read_items(&self) -> Result<Vec<MenuItem>> {
        Err(MenuError::StoreInit(self.reason.clone()))
    }

    fn info(&self) -> Result<StoreInfo> {
        Ok(StoreInfo {
            location: None,
            item_count: 0,
            saved_at: None,
        })
    }

    fn clear(&mut self) -> Result<bool> {
        Ok(false)
    }
}

/// 設定で選ばれた保存先
pub enum Store {
    Json(JsonFileStore),
    Sqlite(SqliteStore),
    Null(NullStore),
}

impl Store {
    /// 保存方式とデータディレクトリから保存先を作る
    ///
    /// ディレクトリが決められない場合はNullStoreになる。
    pub fn open(kind: StorageKind, data_dir: Result<PathBuf>) -> Self {
        let dir = match (kind, data_dir) {
            (StorageKind::None, _) => {
                return Store::Null(NullStore::new("保存が無効に設定されています"))
            }
            (_, Err(e)) => return Store::Null(NullStore::new(e.to_string())),
            (_, Ok(dir)) => dir,
        };

        match kind {
            StorageKind::Json => Store::Json(JsonFileStore::new(&dir)),
            StorageKind::Sqlite => Store::Sqlite(SqliteStore::new(&dir)),
            StorageKind::None => Store::Null(NullStore::new("保存が無効に設定されています")),
        }
    }

    pub fn kind(&self) -> StorageKind {
        match self {
            Store::Json(_) => StorageKind::Json,
            Store::Sqlite(_) => StorageKind::Sqlite,
            Store::Null(_) => StorageKind::None,
        }
    }

    fn inner(&self) -> &dyn CatalogStore {
        match self {
            Store::Json(s) => s,
            Store::Sqlite(s) => s,
            Store::Null(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn CatalogStore {
        match self {
            Store::Json(s) => s,
            Store::Sqlite(s) => s,
            Store::Null(s) => s,
        }
    }
}

impl CatalogStore for Store {
    fn ensure_schema(&mut self) -> Result<()> {
        self.inner_mut().ensure_schema()
    }

    fn write_items(&mut self, items: &[MenuItem]) -> Result<()> {
        self.inner_mut().write_items(items)
    }

    fn read_items(&self) -> Result<Vec<MenuItem>> {
        self.inner().read_items()
    }

    fn info(&self) -> Result<StoreInfo> {
        self.inner().info()
    }

    fn clear(&mut self) -> Result<bool> {
        self.inner_mut().clear()
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        MenuError::StoreInit(format!("ディレクトリを作成できません {}: {}", dir.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_none_is_null() {
        let dir = tempdir().unwrap();
        let store = Store::open(StorageKind::None, Ok(dir.path().to_path_buf()));
        assert_eq!(store.kind(), StorageKind::None);
    }

    #[test]
    fn test_open_without_data_dir_is_null() {
        let store = Store::open(
            StorageKind::Sqlite,
            Err(MenuError::StoreInit("no data dir".into())),
        );
        assert_eq!(store.kind(), StorageKind::None);
    }

    #[test]
    fn test_null_store_init_fails() {
        let mut store = NullStore::new("unsupported");
        let err = store.ensure_schema().unwrap_err();
        assert!(matches!(err, MenuError::StoreInit(_)));
        assert!(store.read_items().is_err());
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn test_storage_kind_display() {
        assert_eq!(StorageKind::Json.to_string(), "json");
        assert_eq!(StorageKind::Sqlite.to_string(), "sqlite");
        assert_eq!(StorageKind::None.to_string(), "none");
    }
}
