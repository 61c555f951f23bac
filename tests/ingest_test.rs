//! ファイル取り込みテスト
//!
//! 非同期読み込みから状態更新までの流れを検証

use job_board::ingest::{load_intent, read_jobs};
use job_board_common::{update, AppState, IngestError, Intent, Render, Schema, SortMode};
use std::path::Path;
use tempfile::tempdir;

const SCENARIO: &str = r#"[{"Title":"B","Posted":"2 hour"},{"Title":"A","Posted":"1 day"}]"#;

/// 正常なファイルの読み込み
#[tokio::test]
async fn test_read_jobs_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("jobs.json");
    std::fs::write(&path, SCENARIO).unwrap();

    let jobs = read_jobs(Some(path.as_path()), Schema::Auto).await.expect("読み込み失敗");
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title, "B");
    assert_eq!(jobs[1].posted.sort_key(), 1_440);
}

/// ファイル未選択
#[tokio::test]
async fn test_read_jobs_without_file() {
    let err = read_jobs(None, Schema::Auto).await.unwrap_err();
    assert!(matches!(err, IngestError::NoFileSelected));
}

/// 存在しないファイル
#[tokio::test]
async fn test_read_jobs_missing_file() {
    let err = read_jobs(Some(Path::new("/nonexistent/jobs-12345.json")), Schema::Auto)
        .await
        .unwrap_err();
    assert!(matches!(err, IngestError::Read(_)));
}

/// 読み込み → 並び替えのシナリオ
#[tokio::test]
async fn test_load_intent_then_sort() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("jobs.json");
    std::fs::write(&path, SCENARIO).unwrap();

    let mut state = AppState::default();
    let render = update(&mut state, load_intent(Some(path.as_path())).await);
    assert!(matches!(render, Render::Full { .. }));

    let titles = |view: &[usize]| -> Vec<String> {
        view.iter().map(|&i| state.jobs[i].title.clone()).collect()
    };

    let mut oldest = state.clone();
    update(&mut oldest, Intent::SortChanged(SortMode::TimeOldest));
    assert_eq!(titles(&oldest.view()), ["B", "A"]);

    let mut by_title = state.clone();
    update(&mut by_title, Intent::SortChanged(SortMode::TitleAsc));
    assert_eq!(titles(&by_title.view()), ["A", "B"]);
}

/// 不正なJSONでは既存の一覧を保持
#[tokio::test]
async fn test_malformed_file_keeps_previous_jobs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    std::fs::write(&good, SCENARIO).unwrap();
    std::fs::write(&bad, "not json").unwrap();

    let mut state = AppState::default();
    update(&mut state, load_intent(Some(good.as_path())).await);
    let render = update(&mut state, load_intent(Some(bad.as_path())).await);

    assert!(matches!(render, Render::Error { .. }));
    assert_eq!(state.jobs.len(), 2);
    assert!(state.error.as_deref().unwrap().starts_with("Error loading JSON"));
}

/// 存在しないファイルはエラー表示欄へ
#[tokio::test]
async fn test_unreadable_file_sets_error_slot() {
    let mut state = AppState::default();
    let intent = load_intent(Some(Path::new("/nonexistent/jobs-12345.json"))).await;
    assert!(matches!(intent, Intent::FileFailed(_)));

    update(&mut state, intent);
    assert!(state.jobs.is_empty());
    assert!(state.error.is_some());
}

/// ファイル未選択は NoFileSelected
#[tokio::test]
async fn test_load_intent_without_file() {
    assert!(matches!(load_intent(None).await, Intent::NoFileSelected));
}
