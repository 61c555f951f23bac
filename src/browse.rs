//! 対話式ブラウザ
//!
//! メニュー操作を [`Intent`] に変換して [`update`] に渡し、
//! 返ってきた [`Render`] を端末に描画する。

use crate::error::{JobBoardError, Result};
use crate::ingest::load_intent;
use crate::render::{render_detail, render_error, render_list, render_options};
use dialoguer::{Input, Select};
use job_board_common::{update, AppState, FilterField, Intent, Render, SortMode, ALL_OPTION};
use std::path::{Path, PathBuf};

/// メニュー項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    LoadFile,
    Filter(FilterField),
    Sort,
    ViewJob,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::ViewJob,
        MenuAction::Filter(FilterField::Level),
        MenuAction::Filter(FilterField::Type),
        MenuAction::Filter(FilterField::Skill),
        MenuAction::Sort,
        MenuAction::LoadFile,
        MenuAction::Quit,
    ];

    pub fn label(&self, state: &AppState) -> String {
        match self {
            MenuAction::LoadFile => "ファイルを読み込む".to_string(),
            MenuAction::Filter(field) => format!(
                "{}で絞り込み [{}]",
                field,
                state.selection.get(*field).unwrap_or(ALL_OPTION)
            ),
            MenuAction::Sort => format!("並び替え [{}]", state.sort.label()),
            MenuAction::ViewJob => "求人の詳細を見る".to_string(),
            MenuAction::Quit => "終了".to_string(),
        }
    }
}

/// 対話ループを実行
pub async fn run_browse(state: &mut AppState, initial: Option<&Path>) -> Result<()> {
    if let Some(path) = initial {
        let intent = load_intent(Some(path)).await;
        let render = update(state, intent);
        draw(state, render);
    }

    loop {
        let labels: Vec<String> = MenuAction::ALL.iter().map(|a| a.label(state)).collect();
        let choice = Select::new()
            .with_prompt(format!("操作を選択 ({}件表示中)", state.view().len()))
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        let intent = match MenuAction::ALL[choice] {
            MenuAction::Quit => break,
            MenuAction::LoadFile => load_intent(prompt_path()?.as_deref()).await,
            MenuAction::Filter(field) => prompt_filter(state, field)?,
            MenuAction::Sort => prompt_sort(state)?,
            MenuAction::ViewJob => match prompt_job(state)? {
                Some(intent) => intent,
                None => continue,
            },
        };

        let render = update(state, intent);
        draw(state, render);
    }

    Ok(())
}

/// 描画指示を端末に出力
pub fn draw(state: &AppState, render: Render) {
    match render {
        Render::Full { options, view } => {
            println!("✔ {}件の求人を読み込みました\n", state.jobs.len());
            print!("{}", render_options(&options));
            println!();
            print!("{}", render_list(&state.jobs, &view));
        }
        Render::List { view } => print!("{}", render_list(&state.jobs, &view)),
        Render::Detail { index } => {
            if let Some(job) = state.jobs.get(index) {
                print!("{}", render_detail(job));
            }
        }
        Render::Error { message } => eprintln!("{}", render_error(&message)),
        Render::Nothing => {}
    }
    println!();
}

fn prompt_path() -> Result<Option<PathBuf>> {
    let input: String = Input::new()
        .with_prompt("JSONファイルのパス")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let trimmed = input.trim();
    Ok(if trimmed.is_empty() { None } else { Some(PathBuf::from(trimmed)) })
}

fn prompt_filter(state: &AppState, field: FilterField) -> Result<Intent> {
    let values = state.options.values(field);
    let mut items = vec![ALL_OPTION.to_string()];
    items.extend(values.iter().cloned());

    let current = state
        .selection
        .get(field)
        .and_then(|v| values.iter().position(|x| x == v))
        .map_or(0, |i| i + 1);

    let choice = Select::new()
        .with_prompt(format!("{}を選択", field))
        .items(&items)
        .default(current)
        .interact()
        .map_err(prompt_error)?;

    let value = if choice == 0 { None } else { Some(values[choice - 1].clone()) };
    Ok(Intent::FilterChanged(field, value))
}

fn prompt_sort(state: &AppState) -> Result<Intent> {
    let modes: Vec<SortMode> = SortMode::CHOICES
        .into_iter()
        .chain(std::iter::once(SortMode::Unsorted))
        .collect();
    let labels: Vec<&str> = modes.iter().map(|m| m.label()).collect();
    let current = modes.iter().position(|m| *m == state.sort).unwrap_or(0);

    let choice = Select::new()
        .with_prompt("並び替えを選択")
        .items(&labels)
        .default(current)
        .interact()
        .map_err(prompt_error)?;

    Ok(Intent::SortChanged(modes[choice]))
}

fn prompt_job(state: &AppState) -> Result<Option<Intent>> {
    let view = state.view();
    if view.is_empty() {
        println!("表示中の求人がありません\n");
        return Ok(None);
    }

    let labels: Vec<String> = view
        .iter()
        .map(|&i| crate::render::list_line(&state.jobs[i]))
        .collect();

    let choice = Select::new()
        .with_prompt("求人を選択")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    Ok(Some(Intent::JobSelected(view[choice])))
}

fn prompt_error(err: dialoguer::Error) -> JobBoardError {
    JobBoardError::Prompt(err.to_string())
}
