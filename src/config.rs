use crate::error::{MenuError, Result};
use crate::store::StorageKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 公開されているLittle Lemonのメニュー
pub const DEFAULT_MENU_URL: &str =
    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/menu-items-by-category.json";

/// URLの環境変数（設定ファイルより優先）
pub const MENU_URL_ENV: &str = "MENU_BROWSER_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub menu_url: String,
    pub storage: StorageKind,
    pub data_dir: Option<PathBuf>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MenuError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("menu-browser").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            menu_url: DEFAULT_MENU_URL.into(),
            storage: StorageKind::Json,
            data_dir: None,
            timeout_seconds: 10,
        }
    }

    pub fn menu_url(&self) -> String {
        // 環境変数を優先
        match std::env::var(MENU_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.menu_url.clone(),
        }
    }

    /// 保存先ディレクトリ（未設定ならOSのデータディレクトリ）
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| MenuError::StoreInit("データディレクトリが見つかりません".into()))?;
        Ok(base.join("menu-browser"))
    }

    pub fn set_menu_url(&mut self, url: String) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(MenuError::Config(format!("URLが不正です: {}", url)));
        }
        self.menu_url = url;
        self.save()
    }

    pub fn set_storage(&mut self, storage: StorageKind) -> Result<()> {
        self.storage = storage;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage, StorageKind::Json);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            menu_url: "http://localhost:8080/menu.json".into(),
            storage: StorageKind::Sqlite,
            data_dir: Some(dir.path().to_path_buf()),
            timeout_seconds: 3,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"storage": "none"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.storage, StorageKind::None);
        assert_eq!(config.menu_url, DEFAULT_MENU_URL);
    }

    #[test]
    fn test_data_dir_override() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/menu-data")),
            ..Default::default()
        };
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/menu-data"));
    }
}
