//! Document shapes for the articles and dialogue_index collections.
//!
//! Field names serialize in camelCase to match the documents the rest of
//! the memory library reads and writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source type marking an article as a dialogue log.
pub const DIALOGUE_LOG_SOURCE: &str = "DIALOGUE_LOG";

/// A raw dialogue-log article as stored in the articles collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueLog {
    /// Document id within the articles collection.
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    pub source_type: String,

    /// Creation timestamp. Absent on some legacy documents; such logs are
    /// excluded from the index.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// One day's worth of indexed dialogue, keyed by its JST calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyIndex {
    /// The indexed date at UTC midnight.
    pub date: DateTime<Utc>,

    pub daily_summary: String,

    /// Time-of-day windows in ascending order.
    pub time_chunks: Vec<TimeChunk>,

    /// Stamped when the document is written.
    pub updated_at: DateTime<Utc>,
}

impl DailyIndex {
    /// Document key within the dialogue_index collection ("YYYY-MM-DD").
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// A contiguous time-of-day window of dialogue activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeChunk {
    /// Window start as a JST clock label ("09:00").
    pub start_time: String,

    /// Window end as a JST clock label ("11:59").
    pub end_time: String,

    pub chunk_summary: String,

    pub categories: Vec<String>,

    pub tags: Vec<String>,

    pub key_moments: Vec<KeyMoment>,
}

/// A notable entry within a time chunk, pointing back at its article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMoment {
    pub topic: String,

    /// JST clock time of the moment ("10:15").
    pub timestamp: String,

    pub article_id: String,

    pub article_title: String,
}
