//! リモートからのメニュー取得
//!
//! 1回の解決につき1回だけ試行する（リトライ・バックオフなし）。

use crate::error::{MenuError, Result};
use menu_browser_common::{parse_menu_response, MenuItem};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// メニューの取得元
pub trait MenuFetcher {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<MenuItem>>> + Send;
}

/// HTTPでJSONを取得する
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| MenuError::Fetch(format!("HTTPクライアント初期化に失敗: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl MenuFetcher for HttpFetcher {
    async fn fetch_catalog(&self) -> Result<Vec<MenuItem>> {
        debug!(url = %self.url, "fetching menu");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| MenuError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MenuError::Fetch(format!("HTTP {}: {}", status, self.url)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MenuError::Fetch(e.to_string()))?;

        let items = parse_menu_response(&body).map_err(|e| MenuError::Parse(e.to_string()))?;
        debug!(count = items.len(), "menu parsed");
        Ok(items)
    }
}

/// 常に失敗する取得元（オフライン実行用）
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFetcher;

impl MenuFetcher for OfflineFetcher {
    async fn fetch_catalog(&self) -> Result<Vec<MenuItem>> {
        Err(MenuError::Fetch("オフラインモード".into()))
    }
}

/// 設定で選ばれた取得元
#[derive(Debug, Clone)]
pub enum Fetcher {
    Http(HttpFetcher),
    Offline(OfflineFetcher),
}

impl MenuFetcher for Fetcher {
    async fn fetch_catalog(&self) -> Result<Vec<MenuItem>> {
        match self {
            Fetcher::Http(f) => f.fetch_catalog().await,
            Fetcher::Offline(f) => f.fetch_catalog().await,
        }
    }
}
