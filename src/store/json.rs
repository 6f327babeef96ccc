//! JSONファイル保存
//!
//! メニュー全体を1ファイルに保存する。バージョンとチェックサムを持ち、
//! 不一致や破損がある場合は「何も保存されていない」として扱う。

use super::{ensure_dir, CatalogStore, StoreInfo};
use crate::error::{MenuError, Result};
use menu_browser_common::MenuItem;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// 保存ファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// バージョン（互換性チェック用）
    version: u32,
    /// 保存日時（RFC3339）
    #[serde(default)]
    saved_at: Option<String>,
    /// items のSHA-256
    checksum: String,
    items: Vec<MenuItem>,
}

impl CatalogFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            saved_at: Some(chrono::Utc::now().to_rfc3339()),
            checksum: compute_checksum(&items),
            items,
        }
    }

    pub fn cache_path(dir: &Path) -> PathBuf {
        dir.join(CATALOG_FILE_NAME)
    }

    /// 保存ファイルを読み込み
    ///
    /// ファイルが無い・壊れている・バージョン違い・チェックサム不一致の
    /// いずれも空として扱う。読み込み自体のIOエラーのみ返す。
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::cache_path(dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = File::open(&path)
            .map_err(|e| MenuError::Persist(format!("{}: {}", path.display(), e)))?;
        let reader = BufReader::new(file);

        let catalog: CatalogFile = match serde_json::from_reader(reader) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "catalog file is corrupted; ignoring");
                return Ok(Self::default());
            }
        };

        if catalog.version != Self::CURRENT_VERSION {
            warn!(
                found = catalog.version,
                expected = Self::CURRENT_VERSION,
                "catalog file version mismatch; ignoring"
            );
            return Ok(Self::default());
        }

        if catalog.checksum != compute_checksum(&catalog.items) {
            warn!(path = %path.display(), "catalog checksum mismatch; ignoring");
            return Ok(Self::default());
        }

        Ok(catalog)
    }

    /// 一時ファイルに書いてから置き換える
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = Self::cache_path(dir);
        let tmp_path = path.with_extension("json.tmp");

        let write = || -> std::io::Result<()> {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.flush()?;
            std::fs::rename(&tmp_path, &path)
        };

        write().map_err(|e| {
            let _ = std::fs::remove_file(&tmp_path);
            MenuError::Persist(format!("{}: {}", path.display(), e))
        })
    }

    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }

    pub fn saved_at(&self) -> Option<&str> {
        self.saved_at.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for CatalogFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            saved_at: None,
            checksum: compute_checksum(&[]),
            items: Vec::new(),
        }
    }
}

/// items をJSON化したバイト列のSHA-256（16進）
pub fn compute_checksum(items: &[MenuItem]) -> String {
    let bytes = serde_json::to_vec(items).unwrap_or_default();
    hex::encode(Sha256::digest(&bytes))
}

/// JSONファイルの保存先
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn path(&self) -> PathBuf {
        CatalogFile::cache_path(&self.dir)
    }
}

impl CatalogStore for JsonFileStore {
    fn ensure_schema(&mut self) -> Result<()> {
        ensure_dir(&self.dir)
    }

    fn write_items(&mut self, items: &[MenuItem]) -> Result<()> {
        CatalogFile::new(items.to_vec()).save(&self.dir)?;
        debug!(count = items.len(), path = %self.path().display(), "catalog written");
        Ok(())
    }

    fn read_items(&self) -> Result<Vec<MenuItem>> {
        Ok(CatalogFile::load(&self.dir)?.into_items())
    }

    fn info(&self) -> Result<StoreInfo> {
        let catalog = CatalogFile::load(&self.dir)?;
        Ok(StoreInfo {
            location: Some(self.path()),
            item_count: catalog.len(),
            saved_at: catalog.saved_at().map(str::to_string),
        })
    }

    fn clear(&mut self) -> Result<bool> {
        let path = self.path();
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)?;
        Ok(true)
    }
}
