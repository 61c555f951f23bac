//! 求人ファイルの非同期読み込み
//!
//! ファイル内容を読み込んで [`Intent`] に変換する。パースは状態更新側で行う。

use chrono::Utc;
use job_board_common::{parse_jobs, IngestError, Intent, Job, Schema};
use std::path::Path;

/// ファイルを読み込み、状態更新用の操作を作る
///
/// 読み込みに失敗しても `Err` にはせず、エラー表示用の [`Intent`] を返す。
pub async fn load_intent(path: Option<&Path>) -> Intent {
    let Some(path) = path else {
        return Intent::NoFileSelected;
    };

    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            tracing::debug!(path = %path.display(), bytes = contents.len(), "job file read");
            Intent::FileLoaded { contents }
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "job file read failed");
            Intent::FileFailed(err.into())
        }
    }
}

/// ファイルを読み込んで求人一覧を返す
pub async fn read_jobs(path: Option<&Path>, schema: Schema) -> Result<Vec<Job>, IngestError> {
    let path = path.ok_or(IngestError::NoFileSelected)?;
    let contents = tokio::fs::read_to_string(path).await?;
    parse_jobs(&contents, schema, Utc::now())
}
