//! Skill trends hook — loads on mount, refreshes hourly, and always ends up
//! holding something renderable.
//!
//! State lives in a `watch` channel so views can subscribe to every change.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{error, info};

use crate::client::fallback::local_fallback_dataset;
use crate::client::TrendsSource;
use crate::trends::models::{iso_timestamp, SkillTrendsDataset};

/// Display palette, cycled by position.
pub const GRADIENTS: [&str; 8] = [
    "linear-gradient(to right, #3b82f6, #4f46e5)",
    "linear-gradient(to right, #a855f7, #ec4899)",
    "linear-gradient(to right, #22c55e, #10b981)",
    "linear-gradient(to right, #f59e0b, #f97316)",
    "linear-gradient(to right, #06b6d4, #3b82f6)",
    "linear-gradient(to right, #ef4444, #e11d48)",
    "linear-gradient(to right, #0ea5e9, #3b82f6)",
    "linear-gradient(to right, #8b5cf6, #a855f7)",
];

/// Technologies start half-way through the palette so the two lists differ.
const TECH_GRADIENT_OFFSET: usize = 4;

const LOCAL_FALLBACK_SOURCE: &str = "fallback";

#[derive(Debug, Clone, PartialEq)]
pub struct TrendsState {
    pub data: Option<SkillTrendsDataset>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<String>,
    pub data_source: Option<String>,
}

impl Default for TrendsState {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            last_updated: None,
            data_source: None,
        }
    }
}

pub struct SkillTrendsHook {
    source: Arc<dyn TrendsSource>,
    state: watch::Sender<TrendsState>,
    refresh_interval: Duration,
}

impl SkillTrendsHook {
    pub fn new(source: Arc<dyn TrendsSource>, refresh_interval: Duration) -> Self {
        let (state, _) = watch::channel(TrendsState::default());
        Self {
            source,
            state,
            // interval timers reject a zero period
            refresh_interval: refresh_interval.max(Duration::from_secs(1)),
        }
    }

    pub fn snapshot(&self) -> TrendsState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TrendsState> {
        self.state.subscribe()
    }

    /// Loads once now, then every `refresh_interval` until the returned
    /// handle is torn down or dropped.
    pub fn mount(self: &Arc<Self>) -> MountedHook {
        let hook = Arc::clone(self);
        let period = self.refresh_interval;

        let task = tokio::spawn(async move {
            hook.refetch().await;

            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                hook.refetch().await;
            }
        });

        MountedHook { task }
    }

    /// Fetches on demand. On failure the error is recorded; data already
    /// loaded is kept, otherwise the local fallback dataset is installed.
    pub async fn refetch(&self) {
        self.state.send_modify(|s| s.loading = true);

        let result = self.source.fetch().await;
        match &result {
            Ok(envelope) => info!("Loaded skill trends (source: {})", envelope.source.as_str()),
            Err(e) => error!("Error fetching skill trends: {e}"),
        }

        self.state.send_modify(|s| {
            match result {
                Ok(envelope) => {
                    s.data = Some(apply_gradients(envelope.data));
                    s.last_updated = Some(envelope.last_updated);
                    s.data_source = Some(envelope.source.as_str().to_string());
                    s.error = envelope.error;
                }
                Err(e) => {
                    s.error = Some(e.to_string());
                    if s.data.is_none() {
                        let now = Utc::now();
                        s.data = Some(apply_gradients(local_fallback_dataset(now)));
                        s.last_updated = Some(iso_timestamp(now));
                        s.data_source = Some(LOCAL_FALLBACK_SOURCE.to_string());
                    }
                }
            }
            s.loading = false;
        });
    }
}

/// Owns the polling task; tearing down (or dropping) cancels the timer.
pub struct MountedHook {
    task: JoinHandle<()>,
}

impl MountedHook {
    pub fn teardown(self) {
        self.task.abort();
    }
}

impl Drop for MountedHook {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Assigns a palette gradient by position to records that lack one.
pub fn apply_gradients(mut dataset: SkillTrendsDataset) -> SkillTrendsDataset {
    for (i, skill) in dataset.skills.iter_mut().enumerate() {
        skill
            .bg_gradient
            .get_or_insert_with(|| GRADIENTS[i % GRADIENTS.len()].to_string());
    }
    for (i, tech) in dataset.emerging_technologies.iter_mut().enumerate() {
        let gradient = GRADIENTS[(i + TECH_GRADIENT_OFFSET) % GRADIENTS.len()];
        tech.bg_gradient.get_or_insert_with(|| gradient.to_string());
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientError, SkillTrendsClient, REFRESH_INTERVAL};
    use crate::trends::fallback::fallback_dataset;
    use crate::trends::models::{DataSource, SkillTrendsResponse};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn envelope(source: DataSource, error: Option<&str>) -> SkillTrendsResponse {
        SkillTrendsResponse {
            success: true,
            data: fallback_dataset(),
            source,
            last_updated: "2025-06-01T09:00:00.000Z".to_string(),
            error: error.map(String::from),
        }
    }

    struct StubSource {
        calls: AtomicUsize,
        failing: AtomicBool,
    }

    impl StubSource {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                failing: AtomicBool::new(false),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TrendsSource for StubSource {
        async fn fetch(&self) -> Result<SkillTrendsResponse, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(ClientError::Status { status: 502 });
            }
            Ok(envelope(DataSource::Fresh, None))
        }
    }

    fn hook_against(server: &MockServer) -> SkillTrendsHook {
        let client = SkillTrendsClient::new(&server.uri()).unwrap();
        SkillTrendsHook::new(Arc::new(client), REFRESH_INTERVAL)
    }

    #[test]
    fn test_initial_state_is_loading_without_data() {
        let hook = SkillTrendsHook::new(StubSource::new(), REFRESH_INTERVAL);
        let state = hook.snapshot();
        assert!(state.loading);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_endpoint_error_installs_local_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/skills"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let hook = hook_against(&server);
        hook.refetch().await;
        let state = hook.snapshot();

        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch skill trends: 500")
        );
        assert_eq!(state.data_source.as_deref(), Some("fallback"));

        let data = state.data.unwrap();
        // The hook's own dataset, not the server's eight-skill fallback.
        assert_eq!(data.skills.len(), 6);
        assert_ne!(data.last_updated, fallback_dataset().last_updated);
        assert_eq!(data.skills[0].bg_gradient.as_deref(), Some(GRADIENTS[0]));
    }

    #[tokio::test]
    async fn test_successful_envelope_sets_data_and_provenance() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/skills"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
                DataSource::StaleCache,
                Some("Failed to fetch fresh data"),
            )))
            .mount(&server)
            .await;

        let hook = hook_against(&server);
        hook.refetch().await;
        let state = hook.snapshot();

        assert!(!state.loading);
        assert_eq!(state.data_source.as_deref(), Some("stale-cache"));
        assert_eq!(state.error.as_deref(), Some("Failed to fetch fresh data"));
        assert_eq!(
            state.last_updated.as_deref(),
            Some("2025-06-01T09:00:00.000Z")
        );

        let data = state.data.unwrap();
        assert_eq!(data.skills.len(), 8);
        assert_eq!(data.skills[1].bg_gradient.as_deref(), Some(GRADIENTS[1]));
        assert_eq!(
            data.emerging_technologies[0].bg_gradient.as_deref(),
            Some(GRADIENTS[4])
        );
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_is_treated_as_error() {
        let server = MockServer::start().await;
        let mut body = envelope(DataSource::Fresh, Some("upstream exploded"));
        body.success = false;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let hook = hook_against(&server);
        hook.refetch().await;
        let state = hook.snapshot();

        assert_eq!(state.error.as_deref(), Some("upstream exploded"));
        assert_eq!(state.data_source.as_deref(), Some("fallback"));
    }

    #[tokio::test]
    async fn test_refetch_failure_keeps_loaded_data() {
        let source = StubSource::new();
        let hook = SkillTrendsHook::new(source.clone(), REFRESH_INTERVAL);

        hook.refetch().await;
        source.failing.store(true, Ordering::SeqCst);
        hook.refetch().await;

        let state = hook.snapshot();
        assert!(!state.loading);
        assert_eq!(state.data_source.as_deref(), Some("fresh"));
        assert_eq!(state.data.unwrap().skills.len(), 8);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch skill trends: 502")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_loads_immediately_then_hourly_until_teardown() {
        let source = StubSource::new();
        let hook = Arc::new(SkillTrendsHook::new(source.clone(), REFRESH_INTERVAL));
        let mut updates = hook.subscribe();

        let mounted = hook.mount();
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(source.calls(), 1);
        assert!(updates.has_changed().unwrap());
        assert!(!updates.borrow_and_update().loading);

        tokio::time::sleep(REFRESH_INTERVAL).await;
        assert_eq!(source.calls(), 2);

        mounted.teardown();
        tokio::time::sleep(REFRESH_INTERVAL * 3).await;
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn test_existing_gradient_is_kept() {
        let mut dataset = fallback_dataset();
        dataset.skills[0].bg_gradient = Some("custom".to_string());
        let dataset = apply_gradients(dataset);
        assert_eq!(dataset.skills[0].bg_gradient.as_deref(), Some("custom"));
        assert_eq!(dataset.skills[7].bg_gradient.as_deref(), Some(GRADIENTS[7]));
        assert_eq!(
            dataset.emerging_technologies[3].bg_gradient.as_deref(),
            Some(GRADIENTS[7])
        );
    }
}
