use anyhow::Context;
use clap::Parser;
use menu_browser::{cli, config, fetch, interactive, logging, render, store};
use menu_browser::{CatalogSource, MenuBrowser};
use cli::{Cli, Commands};
use config::Config;
use fetch::{Fetcher, HttpFetcher, OfflineFetcher};
use store::{CatalogStore, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Show { ref search, ref exclude } => {
            let mut browser = open_browser(&cli, &config)?;
            browser.load().await;
            browser.exclude_categories(exclude);
            let snapshot = browser.set_search_text(search.as_str());
            print!("{}", render::render_sections(&snapshot.filtered));
        }

        Commands::Categories => {
            let mut browser = open_browser(&cli, &config)?;
            let snapshot = browser.load().await;
            print!(
                "{}",
                render::render_categories(&snapshot.sections, &snapshot.selection)
            );
        }

        Commands::Browse => {
            let mut browser = open_browser(&cli, &config)?;
            interactive::run_browse(&mut browser).await?;
        }

        Commands::Export { ref output } => {
            let mut browser = open_browser(&cli, &config)?;
            browser.load().await;

            let json = serde_json::to_string_pretty(browser.catalog())?;
            match output {
                Some(path) => {
                    std::fs::write(path, json)
                        .with_context(|| format!("書き込みに失敗: {}", path.display()))?;
                    println!("✔ メニューを保存: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Cache { clear, info } => {
            let mut store = open_store(&cli, &config);

            if info || !clear {
                // デフォルトまたは--info: 情報表示
                let summary = store.info()?;
                println!("保存情報:");
                println!("  方式: {}", store.kind());
                match &summary.location {
                    Some(path) => println!("  パス: {}", path.display()),
                    None => println!("  パス: (なし)"),
                }
                println!("  件数: {}", summary.item_count);
                if let Some(saved_at) = &summary.saved_at {
                    println!("  保存日時: {}", saved_at);
                }
            }

            if clear {
                match store.clear() {
                    Ok(true) => println!("✔ 保存内容を削除しました"),
                    Ok(false) => println!("保存内容が存在しません"),
                    Err(e) => println!("削除エラー: {}", e),
                }
            }
        }

        Commands::Config { set_url, set_storage, show } => {
            let mut config = config;

            if let Some(url) = set_url {
                config.set_menu_url(url)?;
                println!("✔ URLを設定しました");
            }

            if let Some(kind) = set_storage {
                config.set_storage(kind)?;
                println!("✔ 保存方式を設定しました");
            }

            if show {
                println!("設定:");
                println!("  URL: {}", config.menu_url());
                println!("  保存方式: {}", config.storage);
                match config.data_dir() {
                    Ok(dir) => println!("  保存先: {}", dir.display()),
                    Err(_) => println!("  保存先: (利用不可)"),
                }
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

fn open_store(cli: &Cli, config: &Config) -> Store {
    let kind = cli.storage.unwrap_or(config.storage);
    Store::open(kind, config.data_dir())
}

fn open_browser(cli: &Cli, config: &Config) -> anyhow::Result<MenuBrowser<Fetcher, Store>> {
    let fetcher = if cli.offline {
        Fetcher::Offline(OfflineFetcher)
    } else {
        let url = cli.url.clone().unwrap_or_else(|| config.menu_url());
        Fetcher::Http(HttpFetcher::new(url, config.timeout_seconds)?)
    };

    let source = CatalogSource::new(fetcher, open_store(cli, config));
    Ok(MenuBrowser::new(source))
}
