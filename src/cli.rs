use crate::store::StorageKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menu-browser")]
#[command(about = "メニューカタログ閲覧ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// メニュー取得URL（設定より優先）
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// 保存方式 (json/sqlite/none)
    #[arg(long, global = true)]
    pub storage: Option<StorageKind>,

    /// リモート取得をしない
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// メニューをカテゴリ別に表示
    Show {
        /// 品名の検索文字列（大文字小文字を区別しない）
        #[arg(short, long, default_value = "")]
        search: String,

        /// 表示しないカテゴリ（複数指定可）
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// カテゴリ一覧を表示
    Categories,

    /// 対話式で検索・カテゴリ切り替え
    Browse,

    /// 解決したメニューをJSONで出力
    Export {
        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 保存済みメニューの管理
    Cache {
        /// 保存内容を削除
        #[arg(long)]
        clear: bool,

        /// 保存内容の情報を表示
        #[arg(long)]
        info: bool,
    },

    /// 設定
    Config {
        /// メニュー取得URLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// 保存方式を設定
        #[arg(long)]
        set_storage: Option<StorageKind>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
