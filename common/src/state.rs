//! アプリケーション状態と更新処理
//!
//! UI操作は [`Intent`] として [`update`] に渡し、戻り値の [`Render`] に従って
//! 各フロントエンド（CLI / デスクトップ）が描画する。
//! 求人コレクションを変更するのは取り込み成功時のみ。

use crate::error::IngestError;
use crate::ingest::{parse_jobs, Schema};
use crate::pipeline::{filter_options, view_indices, FilterField, FilterOptions, FilterSelection, SortMode};
use crate::types::Job;
use chrono::Utc;

/// アプリケーション状態
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// 読み込み済みの求人（ファイル読み込みごとに全置換）
    pub jobs: Vec<Job>,
    /// 全件から計算したフィルタ選択肢
    pub options: FilterOptions,
    pub selection: FilterSelection,
    pub sort: SortMode,
    /// 詳細表示中の求人（コレクション内位置）
    pub selected: Option<usize>,
    /// 直近の取り込みエラー
    pub error: Option<String>,
    pub schema: Schema,
}

/// UI操作
#[derive(Debug)]
pub enum Intent {
    /// ファイル内容の読み込み完了
    FileLoaded { contents: String },
    /// ファイル読み込みの失敗
    FileFailed(IngestError),
    /// ファイル未選択
    NoFileSelected,
    FilterChanged(FilterField, Option<String>),
    SortChanged(SortMode),
    /// 求人の選択（コレクション内位置）
    JobSelected(usize),
}

/// 描画指示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    /// フィルタ選択肢と一覧の再描画
    Full { options: FilterOptions, view: Vec<usize> },
    /// 一覧のみ再描画
    List { view: Vec<usize> },
    /// 詳細パネル
    Detail { index: usize },
    /// エラー表示欄
    Error { message: String },
    Nothing,
}

impl AppState {
    pub fn new(schema: Schema, sort: SortMode) -> Self {
        Self {
            schema,
            sort,
            ..Default::default()
        }
    }

    /// 現在のフィルタ・並び替えで一覧を再計算
    pub fn view(&self) -> Vec<usize> {
        view_indices(&self.jobs, &self.selection, self.sort)
    }

    pub fn selected_job(&self) -> Option<&Job> {
        self.selected.and_then(|i| self.jobs.get(i))
    }

    fn replace_jobs(&mut self, jobs: Vec<Job>) {
        self.options = filter_options(&jobs);
        self.jobs = jobs;
        self.selected = None;
        self.error = None;
        // 選択肢を作り直すので、フィルタはすべて "All" に戻す
        self.selection = FilterSelection::default();
    }

    fn fail(&mut self, err: IngestError) -> Render {
        tracing::debug!(error = %err, "ingestion failed, keeping previous jobs");
        let message = err.to_string();
        self.error = Some(message.clone());
        Render::Error { message }
    }
}

/// 操作を状態に適用し、描画指示を返す
pub fn update(state: &mut AppState, intent: Intent) -> Render {
    match intent {
        Intent::FileLoaded { contents } => {
            match parse_jobs(&contents, state.schema, Utc::now()) {
                Ok(jobs) => {
                    tracing::info!(count = jobs.len(), "jobs loaded");
                    state.replace_jobs(jobs);
                    Render::Full {
                        options: state.options.clone(),
                        view: state.view(),
                    }
                }
                Err(err) => state.fail(err),
            }
        }
        Intent::FileFailed(err) => state.fail(err),
        Intent::NoFileSelected => state.fail(IngestError::NoFileSelected),
        Intent::FilterChanged(field, value) => {
            state.selection.set(field, value);
            Render::List { view: state.view() }
        }
        Intent::SortChanged(sort) => {
            state.sort = sort;
            Render::List { view: state.view() }
        }
        Intent::JobSelected(index) => {
            if index < state.jobs.len() {
                state.selected = Some(index);
                Render::Detail { index }
            } else {
                Render::Nothing
            }
        }
    }
}
