//! 掲載時刻の正規化
//!
//! "2 hours ago" のような自由記述の掲載時刻を分単位の経過時間に、
//! ISO形式の日時文字列を `DateTime<Utc>` に変換する。
//! どちらも取り込み時に一度だけ計算し、比較のたびに再パースしない。

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// パースできない掲載時刻を表す番兵値（"oldest" 順で最後に並ぶ）
pub const UNBOUNDED: u64 = u64::MAX;

/// 単位ごとの分換算
const UNIT_MINUTES: &[(&str, u64)] = &[
    ("minute", 1),
    ("hour", 60),
    ("day", 1_440),
    ("week", 10_080),
    ("month", 43_200),
    ("year", 525_600),
];

/// 自由記述の掲載時刻を分に変換
///
/// `<整数> <単位>` を文字列中から探す（大文字小文字を区別しない、数字はASCIIのみ）。
/// マッチしない場合や桁あふれの場合は [`UNBOUNDED`] を返す。
///
/// # Examples
/// ```
/// use job_board_common::time::{minutes_ago, UNBOUNDED};
///
/// assert_eq!(minutes_ago("2 hours ago"), 120);
/// assert_eq!(minutes_ago("just now"), UNBOUNDED);
/// ```
pub fn minutes_ago(text: &str) -> u64 {
    lazy_static::lazy_static! {
        static ref RELATIVE_RE: Regex =
            Regex::new(r"(?i)([0-9]+)\s*(minute|hour|day|week|month|year)").unwrap();
    }

    let Some(cap) = RELATIVE_RE.captures(text) else {
        return UNBOUNDED;
    };
    let Ok(value) = cap[1].parse::<u64>() else {
        return UNBOUNDED;
    };
    let unit = cap[2].to_lowercase();
    let ratio = UNIT_MINUTES
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, ratio)| *ratio)
        .unwrap_or(1);

    value.checked_mul(ratio).unwrap_or(UNBOUNDED)
}

/// ISO風の日時文字列をパース
///
/// 受け付ける形式:
/// 1. RFC 3339 (`2024-03-01T09:30:00Z`, `+09:00` 付き)
/// 2. RFC 2822
/// 3. タイムゾーンなし (`2024-03-01T09:30:00`, `2024-03-01 09:30:00`) → UTC扱い
/// 4. 日付のみ (`2024-03-01`) → UTC 0時
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// エポックミリ秒から日時を作る
pub fn instant_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// 正規化済みの掲載時刻
///
/// 1つのコレクション内ではどちらか一方の形式のみが使われる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PostedTime {
    /// "3 days ago" 形式（元の文字列と分換算値）
    Relative { text: String, minutes: u64 },
    /// 日時形式
    Dated { at: DateTime<Utc> },
}

impl PostedTime {
    pub fn relative(text: impl Into<String>) -> Self {
        let text = text.into();
        let minutes = minutes_ago(&text);
        PostedTime::Relative { text, minutes }
    }

    pub fn dated(at: DateTime<Utc>) -> Self {
        PostedTime::Dated { at }
    }

    /// 比較用スカラー値
    ///
    /// Relative は経過分、Dated はエポックミリ秒。
    pub fn sort_key(&self) -> i128 {
        match self {
            PostedTime::Relative { minutes, .. } => i128::from(*minutes),
            PostedTime::Dated { at } => i128::from(at.timestamp_millis()),
        }
    }
}

impl fmt::Display for PostedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostedTime::Relative { text, .. } => write!(f, "{}", text),
            PostedTime::Dated { at } => {
                write!(f, "{}", at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_ago_units() {
        assert_eq!(minutes_ago("5 minutes ago"), 5);
        assert_eq!(minutes_ago("2 hour"), 120);
        assert_eq!(minutes_ago("1 day"), 1_440);
        assert_eq!(minutes_ago("3 weeks ago"), 30_240);
        assert_eq!(minutes_ago("2 months"), 86_400);
        assert_eq!(minutes_ago("1 year ago"), 525_600);
    }

    #[test]
    fn test_minutes_ago_case_insensitive() {
        assert_eq!(minutes_ago("4 HOURS AGO"), 240);
        assert_eq!(minutes_ago("Posted 7 Days ago"), 10_080);
    }

    #[test]
    fn test_minutes_ago_no_space() {
        assert_eq!(minutes_ago("10minutes"), 10);
    }

    #[test]
    fn test_minutes_ago_ascii_digits_only() {
        assert_eq!(minutes_ago("\u{0663}5 days"), 7_200);
        assert_eq!(minutes_ago("\u{0663} days"), UNBOUNDED);
        assert_eq!(minutes_ago("\u{FF13} hours"), UNBOUNDED);
    }

    #[test]
    fn test_minutes_ago_every_unit_and_magnitude() {
        for &(unit, ratio) in UNIT_MINUTES {
            for n in (0..=120u64).chain([365, 1_000, 99_999]) {
                let expected = n * ratio;
                assert_eq!(minutes_ago(&format!("{} {}", n, unit)), expected, "{} {}", n, unit);
                assert_eq!(minutes_ago(&format!("{} {}s ago", n, unit)), expected, "{} {}s", n, unit);
                assert_eq!(
                    minutes_ago(&format!("Posted {}{}S", n, unit.to_uppercase())),
                    expected,
                    "{}{} upper",
                    n,
                    unit
                );
            }
        }
    }

    #[test]
    fn test_minutes_ago_unmatched() {
        assert_eq!(minutes_ago("N/A"), UNBOUNDED);
        assert_eq!(minutes_ago(""), UNBOUNDED);
        assert_eq!(minutes_ago("yesterday"), UNBOUNDED);
        assert_eq!(minutes_ago("hours ago"), UNBOUNDED);
    }

    #[test]
    fn test_minutes_ago_overflow_saturates() {
        assert_eq!(minutes_ago("99999999999999999999999 years"), UNBOUNDED);
        assert_eq!(minutes_ago("18446744073709551615 hours"), UNBOUNDED);
    }

    #[test]
    fn test_parse_instant_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(parse_instant("2024-03-01T09:30:00Z"), Some(expected));
        assert_eq!(parse_instant("2024-03-01T18:30:00+09:00"), Some(expected));
        assert_eq!(parse_instant("2024-03-01T09:30:00"), Some(expected));
        assert_eq!(parse_instant("2024-03-01 09:30:00"), Some(expected));
        assert_eq!(
            parse_instant("2024-03-01"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_instant_invalid() {
        assert_eq!(parse_instant(""), None);
        assert_eq!(parse_instant("last tuesday"), None);
        assert_eq!(parse_instant("2024-13-45"), None);
    }

    #[test]
    fn test_posted_time_display() {
        assert_eq!(PostedTime::relative("3 days ago").to_string(), "3 days ago");
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(PostedTime::dated(at).to_string(), "2024-03-01T09:30:00Z");
    }

    #[test]
    fn test_sort_key_unbounded_is_largest() {
        let unknown = PostedTime::relative("N/A");
        let year = PostedTime::relative("100 years");
        assert!(unknown.sort_key() > year.sort_key());
    }
}
