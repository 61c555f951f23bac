//! エラー型定義
//!
//! コアロジックで失敗しうるのは取り込みのみ。

use thiserror::Error;

/// 取り込みエラー
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Please select a valid JSON file.")]
    NoFileSelected,

    #[error("Error loading JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Error loading JSON: top-level value must be an array")]
    NotAnArray,

    #[error("Error loading JSON: element {index} is not an object")]
    NotAnObject { index: usize },

    #[error("Error loading JSON: {0}")]
    Read(String),
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::Read(err.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, IngestError>;
