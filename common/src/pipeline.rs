//! フィルタ・並び替えパイプライン
//!
//! ## 処理フロー
//! 1. 全件から開始（元のコレクションは変更しない）
//! 2. 空でないフィルタ値ごとに完全一致で絞り込み
//! 3. 並び替えモードに応じて安定ソート
//!
//! 結果は毎回再計算し、キャッシュしない。

use crate::compare::{compare_by_posted_time, compare_by_title, TimeOrder, TitleOrder};
use crate::types::Job;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// フィルタ選択肢の「制約なし」
pub const ALL_OPTION: &str = "All";

/// フィルタ対象の次元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Level,
    Type,
    Skill,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Level, FilterField::Type, FilterField::Skill];

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Level => "Level",
            FilterField::Type => "Type",
            FilterField::Skill => "Skill",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 3つの完全一致フィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub level: Option<String>,
    pub kind: Option<String>,
    pub skill: Option<String>,
}

impl FilterSelection {
    pub fn new(level: Option<String>, kind: Option<String>, skill: Option<String>) -> Self {
        let mut selection = Self::default();
        selection.set(FilterField::Level, level);
        selection.set(FilterField::Type, kind);
        selection.set(FilterField::Skill, skill);
        selection
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Level => self.level.as_deref(),
            FilterField::Type => self.kind.as_deref(),
            FilterField::Skill => self.skill.as_deref(),
        }
    }

    /// 空文字列は「制約なし」として None に正規化する
    pub fn set(&mut self, field: FilterField, value: Option<String>) {
        let value = value.filter(|v| !v.is_empty());
        match field {
            FilterField::Level => self.level = value,
            FilterField::Type => self.kind = value,
            FilterField::Skill => self.skill = value,
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        FilterField::ALL.iter().all(|&field| match self.get(field) {
            Some(wanted) => job.field(field) == wanted,
            None => true,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.kind.is_none() && self.skill.is_none()
    }
}

/// 並び替えモード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    TitleAsc,
    TitleDesc,
    TimeOldest,
    TimeNewest,
    /// 並び替えなし（絞り込み順のまま）
    #[default]
    Unsorted,
}

impl SortMode {
    pub const CHOICES: [SortMode; 4] = [
        SortMode::TitleAsc,
        SortMode::TitleDesc,
        SortMode::TimeOldest,
        SortMode::TimeNewest,
    ];

    /// 4種類以外のトークンは Unsorted
    pub fn from_token(token: &str) -> Self {
        match token {
            "title-asc" => SortMode::TitleAsc,
            "title-desc" => SortMode::TitleDesc,
            "time-oldest" => SortMode::TimeOldest,
            "time-newest" => SortMode::TimeNewest,
            _ => SortMode::Unsorted,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
            SortMode::TimeOldest => "time-oldest",
            SortMode::TimeNewest => "time-newest",
            SortMode::Unsorted => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::TitleAsc => "Title (A-Z)",
            SortMode::TitleDesc => "Title (Z-A)",
            SortMode::TimeOldest => "Posted Time (Oldest)",
            SortMode::TimeNewest => "Posted Time (Newest)",
            SortMode::Unsorted => "None",
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortMode::from_token(s))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// 表示対象のコレクション内位置を計算
pub fn view_indices(jobs: &[Job], selection: &FilterSelection, sort: SortMode) -> Vec<usize> {
    let mut view: Vec<usize> = jobs
        .iter()
        .enumerate()
        .filter(|(_, job)| selection.matches(job))
        .map(|(i, _)| i)
        .collect();

    // sort_by は安定ソート
    match sort {
        SortMode::TitleAsc => {
            view.sort_by(|&a, &b| compare_by_title(&jobs[a], &jobs[b], TitleOrder::Asc))
        }
        SortMode::TitleDesc => {
            view.sort_by(|&a, &b| compare_by_title(&jobs[a], &jobs[b], TitleOrder::Desc))
        }
        SortMode::TimeOldest => {
            view.sort_by(|&a, &b| compare_by_posted_time(&jobs[a], &jobs[b], TimeOrder::Oldest))
        }
        SortMode::TimeNewest => {
            view.sort_by(|&a, &b| compare_by_posted_time(&jobs[a], &jobs[b], TimeOrder::Newest))
        }
        SortMode::Unsorted => {}
    }

    view
}

/// 絞り込み・並び替え済みの求人一覧
pub fn apply<'a>(jobs: &'a [Job], selection: &FilterSelection, sort: SortMode) -> Vec<&'a Job> {
    view_indices(jobs, selection, sort)
        .into_iter()
        .map(|i| &jobs[i])
        .collect()
}

/// フィルタ選択肢（全件から計算、出現順で重複除去）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub level: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Vec<String>,
    pub skill: Vec<String>,
}

impl FilterOptions {
    pub fn values(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Level => &self.level,
            FilterField::Type => &self.kind,
            FilterField::Skill => &self.skill,
        }
    }

    pub fn contains(&self, field: FilterField, value: &str) -> bool {
        self.values(field).iter().any(|v| v == value)
    }
}

pub fn distinct_values(jobs: &[Job], field: FilterField) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .map(|job| job.field(field))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

pub fn filter_options(jobs: &[Job]) -> FilterOptions {
    FilterOptions {
        level: distinct_values(jobs, FilterField::Level),
        kind: distinct_values(jobs, FilterField::Type),
        skill: distinct_values(jobs, FilterField::Skill),
    }
}
