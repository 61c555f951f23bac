//! 並び替え用の比較関数

use crate::types::Job;
use feruca::{Collator, Locale, Tailoring};
use std::cell::RefCell;
use std::cmp::Ordering;

thread_local! {
    /// CLDRルートロケールの照合器（可変重み付けなし、同値時はバイト順）
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

/// タイトル順の方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleOrder {
    Asc,
    Desc,
}

impl TitleOrder {
    /// "asc" 以外はすべて降順
    pub fn from_token(token: &str) -> Self {
        if token == "asc" {
            TitleOrder::Asc
        } else {
            TitleOrder::Desc
        }
    }
}

/// 掲載時刻順の方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOrder {
    /// 正規化値の昇順
    Oldest,
    /// 正規化値の降順
    Newest,
}

impl TimeOrder {
    /// "oldest" 以外はすべて降順
    pub fn from_token(token: &str) -> Self {
        if token == "oldest" {
            TimeOrder::Oldest
        } else {
            TimeOrder::Newest
        }
    }
}

/// Unicode照合アルゴリズムによる文字列比較
///
/// アクセントや大文字小文字は二次・三次の差として扱うため、
/// "Éditeur" は "Zoo" より前、同じ綴りなら小文字が先になる。
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

pub fn compare_by_title(a: &Job, b: &Job, order: TitleOrder) -> Ordering {
    match order {
        TitleOrder::Asc => locale_cmp(&a.title, &b.title),
        TitleOrder::Desc => locale_cmp(&b.title, &a.title),
    }
}

pub fn compare_by_posted_time(a: &Job, b: &Job, order: TimeOrder) -> Ordering {
    let (ka, kb) = (a.posted.sort_key(), b.posted.sort_key());
    match order {
        TimeOrder::Oldest => ka.cmp(&kb),
        TimeOrder::Newest => kb.cmp(&ka),
    }
}
