//! 絞り込み・並び替えの性質テスト

use chrono::Utc;
use job_board_common::pipeline::view_indices;
use job_board_common::{
    apply, compare_by_posted_time, compare_by_title, parse_jobs, FilterSelection, Job, Schema,
    SortMode, TimeOrder, TitleOrder,
};

fn load(text: &str) -> Vec<Job> {
    parse_jobs(text, Schema::Auto, Utc::now()).expect("パース失敗")
}

fn catalog() -> Vec<Job> {
    load(
        r#"[
        {"Title":"Platform Engineer","Posted":"3 hours ago","Type":"Full-time","Level":"Senior","Skill":"Rust"},
        {"Title":"Data Analyst","Posted":"2 days ago","Type":"Contract","Level":"Junior","Skill":"SQL"},
        {"Title":"SRE","Posted":"45 minutes ago","Type":"Full-time","Level":"Senior","Skill":"Go"},
        {"Title":"data engineer","Posted":"1 week ago","Type":"Full-time","Level":"Mid","Skill":"Rust"},
        {"Title":"Intern","Posted":"recently","Type":"Internship","Level":"Junior","Skill":"Rust"}
    ]"#,
    )
}

/// レベル絞り込みのシナリオ
#[test]
fn test_senior_filter_scenario() {
    let jobs = load(r#"[{"Title":"S","Level":"Senior"},{"Title":"J","Level":"Junior"}]"#);
    let selection = FilterSelection::new(Some("Senior".into()), None, None);
    let view = apply(&jobs, &selection, SortMode::Unsorted);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].title, "S");
}

/// 結果は入力順に依存しない部分集合
#[test]
fn test_filter_result_is_order_independent_subset() {
    let jobs = catalog();
    let mut reversed = jobs.clone();
    reversed.reverse();

    let selection = FilterSelection::new(Some("Senior".into()), Some("Full-time".into()), None);
    let mut a: Vec<String> = apply(&jobs, &selection, SortMode::Unsorted)
        .iter()
        .map(|j| j.title.clone())
        .collect();
    let mut b: Vec<String> = apply(&reversed, &selection, SortMode::Unsorted)
        .iter()
        .map(|j| j.title.clone())
        .collect();
    a.sort();
    b.sort();
    assert_eq!(a, ["Platform Engineer", "SRE"]);
    assert_eq!(a, b);

    for job in apply(&jobs, &selection, SortMode::TitleDesc) {
        assert!(selection.matches(job));
    }
}

/// 並び替えを2回適用しても変わらない
#[test]
fn test_title_sort_idempotent() {
    let jobs = catalog();
    let once: Vec<Job> = apply(&jobs, &FilterSelection::default(), SortMode::TitleAsc)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<Job> = apply(&once, &FilterSelection::default(), SortMode::TitleAsc)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(once, twice);
}

/// oldest と newest は逆順
#[test]
fn test_time_orders_are_reversed() {
    let jobs = catalog();
    let oldest = view_indices(&jobs, &FilterSelection::default(), SortMode::TimeOldest);
    let mut newest = view_indices(&jobs, &FilterSelection::default(), SortMode::TimeNewest);
    newest.reverse();
    assert_eq!(oldest, newest);

    let titles: Vec<&str> = oldest.iter().map(|&i| jobs[i].title.as_str()).collect();
    assert_eq!(titles, ["SRE", "Platform Engineer", "Data Analyst", "data engineer", "Intern"]);
}

/// 比較関数単体
#[test]
fn test_comparators_directly() {
    let jobs = catalog();
    assert!(compare_by_title(&jobs[1], &jobs[3], TitleOrder::Asc).is_lt());
    assert!(compare_by_title(&jobs[1], &jobs[3], TitleOrder::from_token("desc")).is_gt());
    assert!(compare_by_posted_time(&jobs[2], &jobs[0], TimeOrder::from_token("oldest")).is_lt());
    assert!(compare_by_posted_time(&jobs[2], &jobs[0], TimeOrder::from_token("newest")).is_gt());
}

/// 元のコレクションは変更されない
#[test]
fn test_source_not_mutated() {
    let jobs = catalog();
    let before = jobs.clone();
    let _ = apply(&jobs, &FilterSelection::new(None, None, Some("Rust".into())), SortMode::TitleAsc);
    assert_eq!(jobs, before);
}

/// 日時形式の並び替え
#[test]
fn test_dated_schema_sorting() {
    let jobs = load(
        r#"[
        {"title":"Later","postedTime":"2024-05-02T00:00:00Z"},
        {"title":"Earlier","postedTime":"2024-05-01"}
    ]"#,
    );
    let oldest = apply(&jobs, &FilterSelection::default(), SortMode::TimeOldest);
    assert_eq!(oldest[0].title, "Earlier");
    let newest = apply(&jobs, &FilterSelection::default(), SortMode::TimeNewest);
    assert_eq!(newest[0].title, "Later");
}
