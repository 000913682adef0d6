use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar day a tip is published for. Serialised as `YYYY-MM-DD`.
///
/// Only the zero-padded form is accepted, so a date matches a stored record
/// exactly when their text matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TipDate(NaiveDate);

impl TipDate {
    pub fn parse(s: &str) -> Result<TipDate, String> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .ok()
            .filter(|date| date.format(DATE_FORMAT).to_string() == s)
            .map(Self)
            .ok_or_else(|| format!("{} is not a valid YYYY-MM-DD date", s))
    }

    /// Today in UTC, the same calendar the scheduler uses.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }
}

impl From<NaiveDate> for TipDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl TryFrom<String> for TipDate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TipDate> for String {
    fn from(value: TipDate) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for TipDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TipContent(String);

impl TipContent {
    /// Content is kept verbatim; it only has to contain something other than whitespace.
    pub fn parse(s: String) -> Result<TipContent, String> {
        if s.trim().is_empty() {
            Err("A daily tip cannot be empty".to_string())
        } else {
            Ok(Self(s))
        }
    }

    /// First `max_graphemes` user-perceived characters, with an ellipsis when cut.
    pub fn preview(&self, max_graphemes: usize) -> String {
        let mut graphemes = self.0.graphemes(true);
        let head: String = graphemes.by_ref().take(max_graphemes).collect();
        if graphemes.next().is_some() {
            format!("{}…", head)
        } else {
            head
        }
    }
}

impl TryFrom<String> for TipContent {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TipContent> for String {
    fn from(value: TipContent) -> Self {
        value.0
    }
}

impl AsRef<str> for TipContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TipContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipSource {
    Admin,
    Scraper,
}

impl TipSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipSource::Admin => "admin",
            TipSource::Scraper => "scraper",
        }
    }
}

/// One day's newsletter content. `date` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub content: TipContent,
    pub date: TipDate,
    pub source: TipSource,
}

impl Tip {
    pub fn new(content: TipContent, date: TipDate, source: TipSource) -> Self {
        Self {
            content,
            date,
            source,
        }
    }

    pub fn is_from_admin(&self) -> bool {
        self.source == TipSource::Admin
    }
}
