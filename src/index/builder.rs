//! Index construction.
//!
//! # Responsibilities
//! - Fetch dialogue logs from the document store
//! - Group them by JST calendar date
//! - Build one DailyIndex per date (summary, chunks, key moments)
//! - Upsert each index document, dates ascending

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};

use crate::index::model::{DailyIndex, DialogueLog, KeyMoment, TimeChunk};
use crate::store::{DocumentStore, StoreError};

/// Offset of the dialogue timezone (JST) from UTC, in hours.
const JST_OFFSET_HOURS: i32 = 9;

/// Width of one time chunk in hours. Divides 24.
const CHUNK_SPAN_HOURS: u32 = 3;

/// Upper bound on key moments emitted per chunk.
const KEY_MOMENTS_PER_CHUNK: usize = 3;

/// Title substitute for logs that carry none.
const UNTITLED: &str = "Untitled dialogue log";

/// Outcome of one index build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Daily index documents written.
    pub days_updated: usize,
    /// Logs that made it into a daily index.
    pub logs_indexed: usize,
    /// Logs skipped for lacking a creation timestamp.
    pub logs_skipped: usize,
}

/// Builds and persists the dialogue index.
pub struct IndexBuilder {
    store: Arc<dyn DocumentStore>,
}

impl IndexBuilder {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Run a full rebuild over every dialogue log in the store.
    pub async fn run(&self) -> Result<BuildReport, StoreError> {
        let logs = self.store.dialogue_logs().await?;
        let (grouped, logs_skipped) = group_by_local_date(logs);

        tracing::info!(
            days = grouped.len(),
            skipped = logs_skipped,
            "Grouped dialogue logs by JST date"
        );

        let mut days_updated = 0;
        let mut logs_indexed = 0;
        for (date, day_logs) in &grouped {
            let index = build_daily_index(*date, day_logs, Utc::now());
            self.store.upsert_daily_index(&index).await?;
            days_updated += 1;
            logs_indexed += day_logs.len();
            tracing::debug!(date = %date, entries = day_logs.len(), "Daily index written");
        }

        Ok(BuildReport {
            days_updated,
            logs_indexed,
            logs_skipped,
        })
    }
}

/// The dialogue timezone.
fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_HOURS * 3600).expect("JST offset is in range")
}

/// Group logs by their JST calendar date, dropping logs without a
/// timestamp. Within each date, logs are ordered by timestamp.
pub fn group_by_local_date(
    logs: Vec<DialogueLog>,
) -> (BTreeMap<NaiveDate, Vec<DialogueLog>>, usize) {
    let tz = jst();
    let mut grouped: BTreeMap<NaiveDate, Vec<DialogueLog>> = BTreeMap::new();
    let mut skipped = 0;

    for log in logs {
        match log.created_at {
            Some(ts) => grouped
                .entry(ts.with_timezone(&tz).date_naive())
                .or_default()
                .push(log),
            None => {
                skipped += 1;
                tracing::warn!(id = %log.id, "Dialogue log has no createdAt, skipping");
            }
        }
    }

    for day_logs in grouped.values_mut() {
        day_logs.sort_by_key(|log| log.created_at);
    }

    (grouped, skipped)
}

/// Build the index document for one date. `now` becomes the updatedAt
/// stamp; logs must all fall on `date` in JST and carry timestamps.
pub fn build_daily_index(date: NaiveDate, logs: &[DialogueLog], now: DateTime<Utc>) -> DailyIndex {
    let noun = if logs.len() == 1 { "entry" } else { "entries" };
    let daily_summary = format!(
        "Dialogue summary for {date}: {count} {noun} recorded.",
        count = logs.len()
    );

    DailyIndex {
        date: date.and_time(NaiveTime::MIN).and_utc(),
        daily_summary,
        time_chunks: build_time_chunks(logs),
        updated_at: now,
    }
}

/// Partition a day's logs into fixed 3-hour JST windows. Only windows
/// containing logs are emitted.
fn build_time_chunks(logs: &[DialogueLog]) -> Vec<TimeChunk> {
    let tz = jst();
    let mut windows: BTreeMap<u32, Vec<(&DialogueLog, DateTime<FixedOffset>)>> = BTreeMap::new();

    for log in logs {
        let Some(ts) = log.created_at else { continue };
        let local = ts.with_timezone(&tz);
        windows
            .entry(local.hour() / CHUNK_SPAN_HOURS)
            .or_default()
            .push((log, local));
    }

    windows
        .into_iter()
        .map(|(window, members)| build_chunk(window, &members))
        .collect()
}

fn build_chunk(window: u32, members: &[(&DialogueLog, DateTime<FixedOffset>)]) -> TimeChunk {
    let start_hour = window * CHUNK_SPAN_HOURS;
    let end_hour = start_hour + CHUNK_SPAN_HOURS - 1;

    let noun = if members.len() == 1 { "entry" } else { "entries" };
    let chunk_summary = match members.iter().find_map(|(log, _)| log.title.as_deref()) {
        Some(title) => format!(
            "{count} dialogue {noun}, beginning with \"{title}\".",
            count = members.len()
        ),
        None => format!(
            "{count} dialogue {noun} recorded in this window.",
            count = members.len()
        ),
    };

    let key_moments = members
        .iter()
        .take(KEY_MOMENTS_PER_CHUNK)
        .map(|(log, local)| KeyMoment {
            topic: log.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
            timestamp: local.format("%H:%M").to_string(),
            article_id: log.id.clone(),
            article_title: log.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
        })
        .collect();

    TimeChunk {
        start_time: format!("{start_hour:02}:00"),
        end_time: format!("{end_hour:02}:59"),
        chunk_summary,
        categories: merged(members.iter().map(|(log, _)| log.categories.as_slice())),
        tags: merged(members.iter().map(|(log, _)| log.tags.as_slice())),
        key_moments,
    }
}

/// Deduplicated union, preserving first-seen order.
fn merged<'a>(lists: impl Iterator<Item = &'a [String]>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for list in lists {
        for value in list {
            if !out.contains(value) {
                out.push(value.clone());
            }
        }
    }
    out
}
