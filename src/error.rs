use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobBoardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("求人が見つかりません: {index}番（表示中 {count}件）")]
    JobNotFound { index: usize, count: usize },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Ingest(#[from] job_board_common::IngestError),

    #[error("対話入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, JobBoardError>;
