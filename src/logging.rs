//! ログ初期化
//!
//! 標準出力はメニュー表示に使うため、ログは標準エラーへ出す。
//! `RUST_LOG` が設定されていればそちらを優先する。

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "menu_browser=debug,menu_browser_common=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // テストなどで既に登録済みの場合は何もしない
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
