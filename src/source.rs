//! メニュー解決モジュール
//!
//! リモート → ローカル保存 → 同梱デフォルト の順で段階的に解決する。
//! どの段の失敗もここでログに記録して吸収し、呼び出し側には
//! 常に空でないメニューを返す。

use crate::error::{MenuError, Result};
use crate::fetch::MenuFetcher;
use crate::store::CatalogStore;
use menu_browser_common::{default_menu, MenuItem};
use tracing::{debug, info, warn};

/// 解決結果の出所（ログ・テスト用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// 取得したものを保存し、保存先から読み戻した
    Store,
    /// 取得できたが保存できず、取得結果をそのまま使った
    Remote,
    Defaults,
}

pub struct CatalogSource<F, S> {
    fetcher: F,
    store: S,
}

impl<F: MenuFetcher, S: CatalogStore> CatalogSource<F, S> {
    pub fn new(fetcher: F, store: S) -> Self {
        Self { fetcher, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// メニューを解決する（失敗しない）
    pub async fn resolve(&mut self) -> Vec<MenuItem> {
        self.resolve_with_origin().await.0
    }

    pub async fn resolve_with_origin(&mut self) -> (Vec<MenuItem>, CatalogOrigin) {
        // 1. 保存先の初期化。使えなければ取得も保存もせずデフォルトへ
        if let Err(e) = self.store.ensure_schema() {
            log_absorbed(&e, "storage unavailable; using bundled menu");
            return (default_menu(), CatalogOrigin::Defaults);
        }

        // 2-3. 取得と保存（どちらも失敗は記録のみ）
        let unsaved = self.fetch_and_persist().await;

        // 4. 保存先から読み込み
        match self.read_stored() {
            Ok(items) => {
                info!(count = items.len(), "menu loaded from storage");
                return (items, CatalogOrigin::Store);
            }
            Err(e) => log_absorbed(&e, "stored menu unavailable"),
        }

        if let Some(items) = unsaved {
            info!(count = items.len(), "using fetched menu without storage");
            return (items, CatalogOrigin::Remote);
        }

        warn!("falling back to bundled menu");
        (default_menu(), CatalogOrigin::Defaults)
    }

    /// 取得して保存する。保存に失敗した場合のみ取得結果を返す
    async fn fetch_and_persist(&mut self) -> Option<Vec<MenuItem>> {
        let items = match self.fetcher.fetch_catalog().await {
            Ok(items) if items.is_empty() => {
                warn!("remote menu is empty; keeping stored menu");
                return None;
            }
            Ok(items) => items,
            Err(e) => {
                log_absorbed(&e, "menu fetch failed");
                return None;
            }
        };
        info!(count = items.len(), "menu fetched");

        match self.store.write_items(&items) {
            Ok(()) => {
                debug!("menu persisted");
                None
            }
            Err(e) => {
                log_absorbed(&e, "menu persist failed");
                Some(items)
            }
        }
    }

    /// 保存先のメニュー。空なら「無い」扱い
    fn read_stored(&self) -> Result<Vec<MenuItem>> {
        let items = self.store.read_items()?;
        if items.is_empty() {
            return Err(MenuError::Persist("保存されたメニューがありません".into()));
        }
        Ok(items)
    }
}

fn log_absorbed(error: &MenuError, message: &str) {
    warn!(tier = %error.tier(), error = %error, "{}", message);
}
