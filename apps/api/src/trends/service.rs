//! Trends service — orchestrates cache → fetch → extract → fallback per request.
//!
//! Every path answers with a dataset; failures only show up in `source` and
//! `error`. Preference order on failure: stale cache, then the fixed fallback.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::errors::{ExtractionError, RefreshError};
use crate::trends::cache::TrendsCache;
use crate::trends::extractor::{extract, PartialDataset};
use crate::trends::fallback::{fallback_dataset, fallback_technologies, merge_fallback_skills};
use crate::trends::fetcher::HtmlFetcher;
use crate::trends::models::{iso_timestamp, DataSource, SkillTrendsDataset, SkillTrendsResponse};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Turns fetched HTML into a partial dataset. Runs on the blocking pool.
pub type ExtractFn = fn(&str) -> Result<PartialDataset, ExtractionError>;

pub struct SkillTrendsService {
    fetcher: Arc<dyn HtmlFetcher>,
    cache: Arc<dyn TrendsCache>,
    ttl: chrono::Duration,
    extractor: ExtractFn,
    /// Bumped under the guard each time a refresh attempt completes.
    attempts: AtomicU64,
    /// Serializes "check freshness, fetch, write" and holds the error of the
    /// last attempt if it failed. Requests queued behind a failed attempt
    /// reuse that error instead of fetching again.
    refresh_guard: Mutex<Option<String>>,
}

impl SkillTrendsService {
    pub fn new(fetcher: Arc<dyn HtmlFetcher>, cache: Arc<dyn TrendsCache>, ttl: Duration) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::hours(1));

        Self {
            fetcher,
            cache,
            ttl,
            extractor: extract,
            attempts: AtomicU64::new(0),
            refresh_guard: Mutex::new(None),
        }
    }

    /// Replaces the HTML extractor (default: [`extract`]).
    pub fn with_extractor(mut self, extractor: ExtractFn) -> Self {
        self.extractor = extractor;
        self
    }

    pub async fn get_skill_trends(&self) -> SkillTrendsResponse {
        self.get_skill_trends_at(Utc::now()).await
    }

    /// Resolves a response as of `now`.
    pub async fn get_skill_trends_at(&self, now: DateTime<Utc>) -> SkillTrendsResponse {
        if let Some(response) = self.cached_response(now) {
            return response;
        }

        let seen = self.attempts.load(Ordering::Acquire);
        let mut last_failure = self.refresh_guard.lock().await;

        // Another request may have refreshed while we waited.
        if let Some(response) = self.cached_response(now) {
            return response;
        }
        if self.attempts.load(Ordering::Acquire) != seen {
            if let Some(error) = last_failure.as_deref() {
                debug!("Reusing failed refresh from a concurrent request");
                return self.degraded_response(now, error);
            }
        }

        let outcome = self.refresh().await;
        self.attempts.fetch_add(1, Ordering::Release);

        match outcome {
            Ok(data) => {
                info!(
                    "Fetched fresh skill trends: {} skills, {} emerging technologies",
                    data.skills.len(),
                    data.emerging_technologies.len()
                );
                *last_failure = None;
                self.cache.write(data.clone(), now);
                SkillTrendsResponse {
                    success: true,
                    data,
                    source: DataSource::Fresh,
                    last_updated: iso_timestamp(now),
                    error: None,
                }
            }
            Err(e) => {
                warn!("Error fetching skill data: {e}");
                let error = e.to_string();
                let response = self.degraded_response(now, &error);
                *last_failure = Some(error);
                response
            }
        }
    }

    fn cached_response(&self, now: DateTime<Utc>) -> Option<SkillTrendsResponse> {
        let entry = self.cache.read()?;
        if !entry.is_fresh(now, self.ttl) {
            return None;
        }

        debug!("Serving skill trends from cache (fetched at {})", entry.fetched_at_millis());
        Some(SkillTrendsResponse {
            success: true,
            data: entry.dataset,
            source: DataSource::Cache,
            last_updated: iso_timestamp(entry.fetched_at),
            error: None,
        })
    }

    /// Stale cache if there is any, otherwise the fixed fallback. Neither is
    /// written back to the cache.
    fn degraded_response(&self, now: DateTime<Utc>, error: &str) -> SkillTrendsResponse {
        match self.cache.read() {
            Some(entry) => SkillTrendsResponse {
                success: true,
                data: entry.dataset,
                source: DataSource::StaleCache,
                last_updated: iso_timestamp(entry.fetched_at),
                error: Some(format!("Failed to fetch fresh data: {error}")),
            },
            None => {
                warn!("No cached skill trends, serving fallback dataset");
                SkillTrendsResponse {
                    success: true,
                    data: fallback_dataset(),
                    source: DataSource::Fallback,
                    last_updated: iso_timestamp(now),
                    error: None,
                }
            }
        }
    }

    /// Fetch and extract. HTML parsing is CPU-bound and runs on the blocking pool;
    /// a panic there surfaces as `ExtractionError::Aborted`.
    async fn refresh(&self) -> Result<SkillTrendsDataset, RefreshError> {
        let html = self.fetcher.fetch().await?;

        let extractor = self.extractor;
        let partial = tokio::task::spawn_blocking(move || extractor(&html))
            .await
            .map_err(|e| ExtractionError::Aborted(e.to_string()))??;

        Ok(assemble_dataset(partial))
    }
}

/// Patches a partial scrape up to the guaranteed minimums.
pub fn assemble_dataset(partial: PartialDataset) -> SkillTrendsDataset {
    let PartialDataset {
        article_title,
        last_updated,
        mut skills,
        emerging_technologies,
    } = partial;

    merge_fallback_skills(&mut skills);

    let emerging_technologies = emerging_technologies.unwrap_or_else(|| {
        debug!("No emerging technologies found, using fallback list");
        fallback_technologies()
    });

    SkillTrendsDataset {
        article_title,
        last_updated,
        skills,
        emerging_technologies,
    }
}
