use crate::error::{JobBoardError, Result};
use job_board_common::{Schema, SortMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 並び替えの既定値を上書きする環境変数
pub const SORT_ENV: &str = "JOB_BOARD_SORT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 並び替えモードのトークン (title-asc / title-desc / time-oldest / time-newest)
    pub default_sort: String,
    pub schema: Schema,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: "none".into(),
            schema: Schema::Auto,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| JobBoardError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("job-board").join("config.json"))
    }

    /// 既定の並び替えモード（環境変数を優先）
    pub fn sort_mode(&self) -> SortMode {
        if let Ok(token) = std::env::var(SORT_ENV) {
            return SortMode::from_token(token.trim());
        }
        SortMode::from_token(&self.default_sort)
    }

    pub fn set_default_sort(&mut self, sort: SortMode) -> Result<()> {
        self.default_sort = sort.token().to_string();
        self.save()
    }

    pub fn set_schema(&mut self, schema: Schema) -> Result<()> {
        self.schema = schema;
        self.save()
    }
}
