//! JSONドキュメントから求人一覧への変換
//!
//! トップレベルは配列、各要素はオブジェクトであること。
//! 認識しないキーは無視し、欠損キーは "N/A"（日時形式では取り込み時刻）で補う。

use crate::error::{IngestError, Result};
use crate::time::{instant_from_millis, parse_instant, PostedTime};
use crate::types::{or_placeholder, Job};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Relative 形式で認識するキー
const RELATIVE_KEYS: &[&str] = &["Title", "Posted", "Type", "Level", "Skill", "Detail"];
/// Dated 形式で認識するキー
const DATED_KEYS: &[&str] = &["title", "postedTime", "type", "level", "skill", "detail"];

/// JSONのキー体系
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// ドキュメントから判定
    #[default]
    Auto,
    /// `Title` / `Posted` ... （"2 hours ago" 形式）
    Relative,
    /// `title` / `postedTime` ... （ISO日時）
    Dated,
}

impl Schema {
    /// ドキュメント全体で1つのキー体系を決める
    ///
    /// 小文字キーのみが現れる場合は Dated、それ以外は Relative。
    pub fn detect(objects: &[&Map<String, Value>]) -> Schema {
        let has_key = |keys: &[&str]| {
            objects
                .iter()
                .any(|obj| keys.iter().any(|k| obj.contains_key(*k)))
        };
        let capitalized = has_key(RELATIVE_KEYS);
        let lowercase = has_key(DATED_KEYS);

        if lowercase && !capitalized {
            Schema::Dated
        } else {
            Schema::Relative
        }
    }
}

impl std::str::FromStr for Schema {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Schema::Auto),
            "relative" | "a" => Ok(Schema::Relative),
            "dated" | "date" | "b" => Ok(Schema::Dated),
            _ => Err(format!("Unknown schema: {}. Use auto, relative, or dated", s)),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Auto => write!(f, "auto"),
            Schema::Relative => write!(f, "relative"),
            Schema::Dated => write!(f, "dated"),
        }
    }
}

/// JSON文字列をパースして求人一覧を作る
///
/// # Arguments
/// * `text` - ファイル内容
/// * `schema` - キー体系（Auto なら自動判定）
/// * `now` - 日時形式で掲載時刻が欠けている場合の既定値
///
/// # Returns
/// * `Ok(Vec<Job>)` - 取り込み成功
/// * `Err` - JSON不正、配列でない、要素がオブジェクトでない
pub fn parse_jobs(text: &str, schema: Schema, now: DateTime<Utc>) -> Result<Vec<Job>> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(IngestError::NotAnArray);
    };

    let objects = items
        .iter()
        .enumerate()
        .map(|(index, item)| item.as_object().ok_or(IngestError::NotAnObject { index }))
        .collect::<Result<Vec<_>>>()?;

    let schema = match schema {
        Schema::Auto => Schema::detect(&objects),
        other => other,
    };
    tracing::debug!(count = objects.len(), %schema, "parsing job document");

    Ok(objects
        .into_iter()
        .map(|obj| match schema {
            Schema::Dated => dated_job(obj, now),
            _ => relative_job(obj),
        })
        .collect())
}

/// `Title` / `Posted` 形式
fn relative_job(obj: &Map<String, Value>) -> Job {
    let text = |key: &str| or_placeholder(obj.get(key).and_then(value_text));
    Job {
        title: text("Title"),
        posted: PostedTime::relative(text("Posted")),
        kind: text("Type"),
        level: text("Level"),
        skill: text("Skill"),
        detail: text("Detail"),
    }
}

/// `title` / `postedTime` 形式
fn dated_job(obj: &Map<String, Value>, now: DateTime<Utc>) -> Job {
    let text = |key: &str| or_placeholder(obj.get(key).and_then(value_text));
    Job {
        title: text("title"),
        posted: PostedTime::dated(posted_instant(obj.get("postedTime"), now)),
        kind: text("type"),
        level: text("level"),
        skill: text("skill"),
        detail: text("detail"),
    }
}

/// 掲載日時の決定（明示的な存在チェック）
fn posted_instant(value: Option<&Value>, now: DateTime<Utc>) -> DateTime<Utc> {
    let parsed = match value {
        None | Some(Value::Null) => return now,
        Some(Value::String(s)) if s.trim().is_empty() => return now,
        Some(Value::String(s)) => parse_instant(s),
        Some(Value::Number(n)) => n.as_i64().and_then(instant_from_millis),
        Some(_) => None,
    };

    parsed.unwrap_or_else(|| {
        tracing::warn!(value = ?value, "unparseable postedTime, using load time");
        now
    })
}

/// JSON値を表示用文字列にする（null は欠損扱い）
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
