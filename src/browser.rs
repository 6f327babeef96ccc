//! メニュー閲覧の状態管理
//!
//! 状態（カタログ・検索文字列・カテゴリ選択）は MenuBrowser だけが持ち、
//! 変更のたびに新しい Snapshot を作って丸ごと差し替える。
//! フィルタの再計算は読み込み済みのカタログから同期的に行い、
//! 取得や保存先の読み直しは起こさない。

use crate::fetch::MenuFetcher;
use crate::source::CatalogSource;
use crate::store::CatalogStore;
use menu_browser_common::{filter, group, MenuItem, Section, Selection};
use tokio::sync::watch;
use tracing::{debug, warn};

/// 表示層に渡す状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// フィルタなしのカテゴリ別メニュー
    pub sections: Vec<Section>,
    /// 検索文字列と選択状態を適用した結果
    pub filtered: Vec<Section>,
    pub selection: Selection,
    pub search_text: String,
    /// 初回解決（および再読み込み）中のみtrue
    pub busy: bool,
}

pub struct MenuBrowser<F, S> {
    source: CatalogSource<F, S>,
    catalog: Vec<MenuItem>,
    current: Snapshot,
    tx: watch::Sender<Snapshot>,
}

impl<F: MenuFetcher, S: CatalogStore> MenuBrowser<F, S> {
    pub fn new(source: CatalogSource<F, S>) -> Self {
        let (tx, _rx) = watch::channel(Snapshot::default());
        Self {
            source,
            catalog: Vec::new(),
            current: Snapshot::default(),
            tx,
        }
    }

    /// 状態の変化を受け取る
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    pub fn catalog(&self) -> &[MenuItem] {
        &self.catalog
    }

    pub fn is_busy(&self) -> bool {
        self.current.busy
    }

    /// メニューを解決し、選択状態を作り直して公開する
    pub async fn load(&mut self) -> &Snapshot {
        self.publish(Snapshot {
            busy: true,
            ..self.current.clone()
        });

        let catalog = self.source.resolve().await;
        let selection = Selection::derive_initial(&catalog);
        let sections = group(&catalog);
        let filtered = filter(&catalog, "", &selection);
        self.catalog = catalog;

        debug!(
            items = self.catalog.len(),
            categories = selection.len(),
            "catalog loaded"
        );

        self.publish(Snapshot {
            sections,
            filtered,
            selection,
            search_text: String::new(),
            busy: false,
        });
        &self.current
    }

    /// 再読み込み（選択状態は全カテゴリ表示に戻る）
    pub async fn reload(&mut self) -> &Snapshot {
        self.load().await
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> &Snapshot {
        let search_text = text.into();
        self.refilter(search_text, self.current.selection.clone())
    }

    pub fn toggle_category(&mut self, category: &str) -> &Snapshot {
        let selection = self.current.selection.toggle(category);
        self.refilter(self.current.search_text.clone(), selection)
    }

    /// 選択状態をまとめて差し替える
    ///
    /// 既知のカテゴリのフラグだけを取り込み、未知のカテゴリは無視する。
    pub fn set_selection(&mut self, requested: &Selection) -> &Snapshot {
        let selection = self
            .current
            .selection
            .iter()
            .fold(self.current.selection.clone(), |acc, (category, on)| {
                acc.with(category, requested.get(category).unwrap_or(on))
            });
        self.refilter(self.current.search_text.clone(), selection)
    }

    /// 指定カテゴリを非表示にする
    ///
    /// 選択状態に無いカテゴリは警告を出して無視し、その名前を返す。
    pub fn exclude_categories<C: AsRef<str>>(&mut self, categories: &[C]) -> Vec<String> {
        let mut unknown = Vec::new();
        let mut selection = self.current.selection.clone();
        for category in categories.iter().map(AsRef::as_ref) {
            if selection.contains(category) {
                selection = selection.with(category, false);
            } else {
                warn!(category = %category, "unknown category; ignoring");
                unknown.push(category.to_string());
            }
        }
        self.refilter(self.current.search_text.clone(), selection);
        unknown
    }

    fn refilter(&mut self, search_text: String, selection: Selection) -> &Snapshot {
        let filtered = filter(&self.catalog, &search_text, &selection);
        self.publish(Snapshot {
            sections: self.current.sections.clone(),
            filtered,
            selection,
            search_text,
            busy: self.current.busy,
        });
        &self.current
    }

    fn publish(&mut self, snapshot: Snapshot) {
        self.tx.send_replace(snapshot.clone());
        self.current = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MenuError, Result};
    use crate::store::NullStore;

    struct FixedFetcher;

    impl MenuFetcher for FixedFetcher {
        async fn fetch_catalog(&self) -> Result<Vec<MenuItem>> {
            Err(MenuError::Fetch("unused".into()))
        }
    }

    #[tokio::test]
    async fn test_events_before_load_are_empty() {
        let source = CatalogSource::new(FixedFetcher, NullStore::new("test"));
        let mut browser = MenuBrowser::new(source);

        let snapshot = browser.set_search_text("sa");
        assert!(snapshot.filtered.is_empty());
        assert_eq!(snapshot.search_text, "sa");
        assert!(!snapshot.busy);
    }

    #[tokio::test]
    async fn test_load_with_null_store_uses_defaults() {
        let source = CatalogSource::new(FixedFetcher, NullStore::new("test"));
        let mut browser = MenuBrowser::new(source);

        let snapshot = browser.load().await.clone();
        assert!(!snapshot.busy);
        assert!(!snapshot.sections.is_empty());
        assert_eq!(snapshot.sections, snapshot.filtered);
        assert_eq!(snapshot.selection.len(), snapshot.sections.len());
    }
}
