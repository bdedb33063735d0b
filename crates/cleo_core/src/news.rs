use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Rank given to sources that are missing from the priority table.
pub const UNRANKED: u32 = 999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("expected month/day/year, got {0:?}")]
    Format(String),
    #[error("no such calendar date: {0:?}")]
    OutOfRange(String),
}

/// Publication date as written in the manifest (`month/day/year`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NewsDate(NaiveDate);

impl NewsDate {
    pub fn from_mdy(month: u32, day: u32, year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn calendar_date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for NewsDate {
    type Err = DateParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let format_err = || DateParseError::Format(raw.to_string());
        let mut parts = raw.trim().split('/');
        let (Some(month), Some(day), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format_err());
        };
        let month: u32 = month.trim().parse().map_err(|_| format_err())?;
        let day: u32 = day.trim().parse().map_err(|_| format_err())?;
        let year: i32 = year.trim().parse().map_err(|_| format_err())?;
        Self::from_mdy(month, day, year).ok_or_else(|| DateParseError::OutOfRange(raw.to_string()))
    }
}

impl fmt::Display for NewsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.0.month(), self.0.day(), self.0.year())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub source: String,
    pub date: NewsDate,
    pub title: String,
    pub link: String,
    pub image: Option<String>,
}

impl NewsItem {
    /// Case-insensitive substring match on title or source.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.source.to_lowercase().contains(needle_lower)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Newest,
    Oldest,
    #[default]
    Recommended,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order {0:?} (expected newest, oldest or recommended)")]
pub struct SortOrderParseError(pub String);

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Recommended, SortOrder::Newest, SortOrder::Oldest];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Recommended => "recommended",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
            SortOrder::Recommended => "Recommended",
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortOrderParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SortOrderParseError(raw.to_string()))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Curated source ranks used for the "recommended" ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriorityTable {
    ranks: HashMap<String, u32>,
}

impl PriorityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rank(mut self, source: impl Into<String>, rank: u32) -> Self {
        self.ranks.insert(source.into(), rank);
        self
    }

    pub fn rank(&self, source: &str) -> u32 {
        self.ranks.get(source).copied().unwrap_or(UNRANKED)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for PriorityTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            ranks: iter
                .into_iter()
                .map(|(source, rank)| (source.into(), rank))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub search_term: String,
    pub sort_order: SortOrder,
}

impl SearchState {
    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn rank(&self, items: &[NewsItem], priorities: &PriorityTable) -> RankedView {
        rank(items, &self.search_term, self.sort_order, priorities)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedView {
    pub matching_news: Vec<NewsItem>,
    /// Non-matching items; only populated while a search term is active.
    pub other_news: Vec<NewsItem>,
}

/// Partitions and orders `items` for display.
///
/// With an empty `search_term` every item matches. Otherwise items whose
/// title or source contains the term (ignoring case) go to `matching_news`,
/// ordered by `sort_order`, and the rest go to `other_news` in priority
/// order. All sorts are stable, so ties keep manifest order.
pub fn rank(
    items: &[NewsItem],
    search_term: &str,
    sort_order: SortOrder,
    priorities: &PriorityTable,
) -> RankedView {
    let (mut matching_news, mut other_news) = if search_term.is_empty() {
        (items.to_vec(), Vec::new())
    } else {
        let needle = search_term.to_lowercase();
        items
            .iter()
            .cloned()
            .partition::<Vec<_>, _>(|item| item.matches(&needle))
    };

    other_news.sort_by_key(|item| priorities.rank(&item.source));

    match sort_order {
        SortOrder::Recommended => matching_news.sort_by_key(|item| priorities.rank(&item.source)),
        SortOrder::Newest => matching_news.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => matching_news.sort_by(|a, b| a.date.cmp(&b.date)),
    }

    RankedView {
        matching_news,
        other_news,
    }
}
