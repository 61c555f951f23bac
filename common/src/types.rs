//! 求人の型定義
//!
//! JSONのキー体系は2種類:
//! - Relative: `Title`, `Posted`, `Type`, `Level`, `Skill`, `Detail`（"2 hours ago" 形式）
//! - Dated: `title`, `postedTime`, `type`, `level`, `skill`, `detail`（ISO日時）

use crate::pipeline::FilterField;
use crate::time::PostedTime;
use serde::Serialize;

/// 欠損・空値の代替表示
pub const PLACEHOLDER: &str = "N/A";

/// 求人1件
///
/// 取り込み後は不変。同一内容の求人も別エントリとして扱う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub posted: PostedTime,
    /// JSONの `Type` / `type`
    #[serde(rename = "type")]
    pub kind: String,
    pub level: String,
    pub skill: String,
    pub detail: String,
}

impl Job {
    /// フィルタ対象フィールドの値
    pub fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Level => &self.level,
            FilterField::Type => &self.kind,
            FilterField::Skill => &self.skill,
        }
    }

    /// 詳細表示用のラベル付きフィールド一覧
    pub fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            ("Posted Time", self.posted.to_string()),
            ("Type", self.kind.clone()),
            ("Level", self.level.clone()),
            ("Skill", self.skill.clone()),
            ("Detail", self.detail.clone()),
        ]
    }
}

/// 文字列フィールドの既定値処理（空なら "N/A"）
pub fn or_placeholder(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER.to_string(),
    }
}
