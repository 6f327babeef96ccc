//! テスト用の取得元・保存先

#![allow(dead_code)]

use menu_browser::error::{MenuError, Result};
use menu_browser::fetch::MenuFetcher;
use menu_browser::store::{CatalogStore, StoreInfo};
use menu_browser_common::MenuItem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn sample_catalog() -> Vec<MenuItem> {
    vec![
        MenuItem::new("1", "Hummus", "5.00", "Appetizers"),
        MenuItem::new("2", "Greek Salad", "12.99", "Salads"),
        MenuItem::new("3", "Water", "3.00", "Beverages"),
    ]
}

/// 固定の結果を返し、呼び出し回数を数える取得元
#[derive(Clone)]
pub struct StubFetcher {
    items: Option<Vec<MenuItem>>,
    calls: Arc<AtomicUsize>,
}

impl StubFetcher {
    pub fn ok(items: Vec<MenuItem>) -> Self {
        Self {
            items: Some(items),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            items: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MenuFetcher for StubFetcher {
    async fn fetch_catalog(&self) -> Result<Vec<MenuItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.items
            .clone()
            .ok_or_else(|| MenuError::Fetch("connection refused".into()))
    }
}

/// メモリ上の保存先。書き込み失敗・読み込み回数を制御できる
#[derive(Default)]
pub struct MemoryStore {
    pub items: Vec<MenuItem>,
    pub fail_writes: bool,
    pub reads: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn read_only(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            fail_writes: true,
            ..Default::default()
        }
    }
}

impl CatalogStore for MemoryStore {
    fn ensure_schema(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_items(&mut self, items: &[MenuItem]) -> Result<()> {
        if self.fail_writes {
            return Err(MenuError::Persist("disk full".into()));
        }
        self.items = items.to_vec();
        Ok(())
    }

    fn read_items(&self) -> Result<Vec<MenuItem>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.clone())
    }

    fn info(&self) -> Result<StoreInfo> {
        Ok(StoreInfo {
            location: None,
            item_count: self.items.len(),
            saved_at: None,
        })
    }

    fn clear(&mut self) -> Result<bool> {
        let had = !self.items.is_empty();
        self.items.clear();
        Ok(had)
    }
}
