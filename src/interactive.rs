//! 対話式閲覧
//!
//! 検索文字列の入力とカテゴリの切り替えを受け付け、
//! そのたびにフィルタ結果を表示する。

use crate::browser::MenuBrowser;
use crate::error::{MenuError, Result};
use crate::fetch::MenuFetcher;
use crate::render::{render_categories, render_sections};
use crate::store::CatalogStore;
use dialoguer::{Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};
use menu_browser_common::Selection;
use std::time::Duration;

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Search,
    Categories,
    Reload,
    Quit,
}

impl BrowseAction {
    const ALL: [BrowseAction; 4] = [
        BrowseAction::Search,
        BrowseAction::Categories,
        BrowseAction::Reload,
        BrowseAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            BrowseAction::Search => "検索文字列を変更",
            BrowseAction::Categories => "カテゴリを切り替え",
            BrowseAction::Reload => "再読み込み",
            BrowseAction::Quit => "終了",
        }
    }
}

/// 読み込み中に表示するスピナー
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// MultiSelectの選択結果（選ばれた位置）から選択状態を作る
pub fn selection_from_checked(current: &Selection, checked: &[usize]) -> Selection {
    current
        .categories()
        .enumerate()
        .fold(current.clone(), |acc, (idx, category)| {
            acc.with(category, checked.contains(&idx))
        })
}

pub async fn run_browse<F, S>(browser: &mut MenuBrowser<F, S>) -> Result<()>
where
    F: MenuFetcher,
    S: CatalogStore,
{
    load_with_spinner(browser, "メニューを読み込み中...").await;

    loop {
        let snapshot = browser.snapshot();
        println!();
        if !snapshot.search_text.is_empty() {
            println!("検索: \"{}\"", snapshot.search_text);
        }
        print!("{}", render_sections(&snapshot.filtered));
        println!();

        let labels: Vec<&str> = BrowseAction::ALL.iter().map(|a| a.label()).collect();
        let choice = Select::new()
            .with_prompt("操作")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| MenuError::Interactive(e.to_string()))?;

        match BrowseAction::ALL[choice] {
            BrowseAction::Search => {
                let current = browser.snapshot().search_text.clone();
                let text: String = Input::new()
                    .with_prompt("検索（空で全件）")
                    .with_initial_text(current)
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| MenuError::Interactive(e.to_string()))?;
                browser.set_search_text(text.trim());
            }
            BrowseAction::Categories => {
                let snapshot = browser.snapshot();
                print!("{}", render_categories(&snapshot.sections, &snapshot.selection));

                let names: Vec<String> = snapshot.selection.categories().map(str::to_string).collect();
                let defaults: Vec<bool> = snapshot.selection.iter().map(|(_, on)| on).collect();
                let checked = MultiSelect::new()
                    .with_prompt("表示するカテゴリ（スペースで切り替え）")
                    .items(&names)
                    .defaults(&defaults)
                    .interact()
                    .map_err(|e| MenuError::Interactive(e.to_string()))?;

                let selection = selection_from_checked(&browser.snapshot().selection, &checked);
                browser.set_selection(&selection);
            }
            BrowseAction::Reload => {
                load_with_spinner(browser, "再読み込み中...").await;
            }
            BrowseAction::Quit => break,
        }
    }

    Ok(())
}

async fn load_with_spinner<F, S>(browser: &mut MenuBrowser<F, S>, message: &str)
where
    F: MenuFetcher,
    S: CatalogStore,
{
    let pb = spinner(message);
    let count = browser.load().await.sections.iter().map(|s| s.len()).sum::<usize>();
    pb.finish_and_clear();
    println!("✔ {}品を読み込みました", count);
}
