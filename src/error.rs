use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("メニュー取得エラー: {0}")]
    Fetch(String),

    #[error("メニューのパースに失敗: {0}")]
    Parse(String),

    #[error("保存エラー: {0}")]
    Persist(String),

    #[error("ストレージが利用できません: {0}")]
    StoreInit(String),

    #[error("対話入力エラー: {0}")]
    Interactive(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLiteエラー: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Common(#[from] menu_browser_common::Error),
}

/// エラーの分類（取得/保存/初期化/その他）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTier {
    Fetch,
    Persist,
    Init,
    Other,
}

impl ErrorTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorTier::Fetch => "fetch",
            ErrorTier::Persist => "persist",
            ErrorTier::Init => "init",
            ErrorTier::Other => "other",
        }
    }
}

impl fmt::Display for ErrorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MenuError {
    pub fn tier(&self) -> ErrorTier {
        match self {
            MenuError::Fetch(_) | MenuError::Parse(_) | MenuError::Common(_) => ErrorTier::Fetch,
            MenuError::Persist(_) | MenuError::Sqlite(_) => ErrorTier::Persist,
            MenuError::StoreInit(_) => ErrorTier::Init,
            MenuError::Config(_)
            | MenuError::Interactive(_)
            | MenuError::Io(_)
            | MenuError::Json(_) => ErrorTier::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
