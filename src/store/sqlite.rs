//! SQLite保存

use super::{ensure_dir, CatalogStore, StoreInfo};
use crate::error::{MenuError, Result};
use menu_browser_common::MenuItem;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DATABASE_FILE_NAME: &str = "little_lemon.db";
const DB_BUSY_TIMEOUT_SECS: u64 = 5;

pub struct SqliteStore {
    dir: PathBuf,
    db: Option<Connection>,
}

impl SqliteStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            db: None,
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(DATABASE_FILE_NAME)
    }

    fn open_connection(db_path: &Path) -> Result<Connection> {
        let db = Connection::open(db_path).map_err(|e| {
            MenuError::StoreInit(format!("データベースを開けません {}: {}", db_path.display(), e))
        })?;
        db.busy_timeout(Duration::from_secs(DB_BUSY_TIMEOUT_SECS))?;
        Ok(db)
    }

    fn connection(&self) -> Result<&Connection> {
        self.db
            .as_ref()
            .ok_or_else(|| MenuError::StoreInit("スキーマが初期化されていません".into()))
    }

    fn init_schema(db: &Connection) -> Result<()> {
        db.execute_batch(
            "CREATE TABLE IF NOT EXISTS menuitems (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                price TEXT NOT NULL,
                category TEXT NOT NULL,
                position INTEGER NOT NULL
            );
            CREATE TABLE IF NOT EXISTS catalog_meta (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            );",
        )
        .map_err(|e| MenuError::StoreInit(format!("スキーマ作成に失敗: {}", e)))
    }
}

impl CatalogStore for SqliteStore {
    fn ensure_schema(&mut self) -> Result<()> {
        if self.db.is_none() {
            ensure_dir(&self.dir)?;
            self.db = Some(Self::open_connection(&self.path())?);
        }
        Self::init_schema(self.connection()?)
    }

    fn write_items(&mut self, items: &[MenuItem]) -> Result<()> {
        let db = self
            .db
            .as_mut()
            .ok_or_else(|| MenuError::StoreInit("スキーマが初期化されていません".into()))?;

        let tx = db.transaction()?;
        tx.execute("DELETE FROM menuitems", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO menuitems (id, title, price, category, position)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (pos, item) in items.iter().enumerate() {
                stmt.execute(params![item.id, item.title, item.price, item.category, pos as i64])?;
            }
        }
        tx.execute(
            "INSERT OR REPLACE INTO catalog_meta (key, value) VALUES ('saved_at', ?1)",
            params![chrono::Utc::now().to_rfc3339()],
        )?;
        tx.commit()?;

        debug!(count = items.len(), path = %self.path().display(), "catalog written");
        Ok(())
    }

    fn read_items(&self) -> Result<Vec<MenuItem>> {
        let db = self.connection()?;
        let mut stmt =
            db.prepare("SELECT id, title, price, category FROM menuitems ORDER BY position")?;
        let rows = stmt.query_map([], |row| {
            Ok(MenuItem {
                id: row.get(0)?,
                title: row.get(1)?,
                price: row.get(2)?,
                category: row.get(3)?,
            })
        })?;

        let items = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(items)
    }

    fn info(&self) -> Result<StoreInfo> {
        let path = self.path();
        if self.db.is_none() && !path.exists() {
            return Ok(StoreInfo {
                location: Some(path),
                item_count: 0,
                saved_at: None,
            });
        }

        let opened;
        let db = match &self.db {
            Some(db) => db,
            None => {
                opened = Self::open_connection(&path)?;
                Self::init_schema(&opened)?;
                &opened
            }
        };

        let count: i64 = db.query_row("SELECT COUNT(*) FROM menuitems", [], |row| row.get(0))?;
        let saved_at: Option<String> = db
            .query_row(
                "SELECT value FROM catalog_meta WHERE key = 'saved_at'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        Ok(StoreInfo {
            location: Some(path),
            item_count: count as usize,
            saved_at,
        })
    }

    fn clear(&mut self) -> Result<bool> {
        // 開いたままではWindowsで削除できない
        self.db = None;

        let path = self.path();
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)?;
        for suffix in ["-wal", "-shm", "-journal"] {
            let sidecar = PathBuf::from(format!("{}{}", path.display(), suffix));
            let _ = std::fs::remove_file(sidecar);
        }
        Ok(true)
    }
}
