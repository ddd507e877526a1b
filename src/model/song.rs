//! Canonical song record shared by every recommendation provider

use chrono::NaiveDate;

/// When a song came out. The catalog only knows years, the service sends dates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Release {
    Year(u16),
    Date(NaiveDate),
    /// Anything the service sent that is neither a date nor a year
    Text(String),
}

impl Release {
    /// Interpret a `release_date` field from the recommendation service.
    /// Empty strings carry no release information.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(Release::Date(date));
        }
        if raw.len() == 4 {
            if let Ok(year) = raw.parse::<u16>() {
                return Some(Release::Year(year));
            }
        }
        Some(Release::Text(raw.to_string()))
    }

    pub fn display(&self) -> String {
        match self {
            Release::Year(year) => year.to_string(),
            Release::Date(date) => date.format("%b %-d, %Y").to_string(),
            Release::Text(text) => text.clone(),
        }
    }
}

/// How a provider rated a song
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SongScore {
    /// Catalog popularity, 0 to 100
    Popularity(u8),
    /// Relevance reported by the recommendation service
    Relevance(f64),
}

impl SongScore {
    pub fn label(&self) -> &'static str {
        match self {
            SongScore::Popularity(_) => "Popularity",
            SongScore::Relevance(_) => "Score",
        }
    }

    pub fn value(&self) -> String {
        match self {
            SongScore::Popularity(p) => format!("{}/100", p),
            SongScore::Relevance(r) => format!("{:.2}", r),
        }
    }
}

/// A single recommendation
#[derive(Clone, Debug, PartialEq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub album: Option<String>,
    pub release: Option<Release>,
    pub lyrics_excerpt: String,
    pub score: SongScore,
}
