//! Timer-driven autosave.
//!
//! A recurring background task that persists the authoritative value of every
//! section on a fixed period, independent of manual commits. The task is
//! spawned once and its handle retained so teardown can cancel the pending
//! timer exactly once.

use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::service::ResumeService;

/// Default autosave period, matching the original application's 30s cadence.
pub const DEFAULT_AUTOSAVE_PERIOD: Duration = Duration::from_secs(30);

/// Periodic autosave driver over a `ResumeService`.
///
/// Each tick runs one full batch to completion before the next tick is
/// honored; ticks that fire while a batch is still in flight are skipped,
/// never queued, so batches cannot overlap even against a pathologically slow
/// store.
pub struct AutosaveScheduler {
    service: ResumeService,
    period: Duration,
    shutdown: Arc<Notify>,
    handle: tokio::sync::RwLock<Option<JoinHandle<()>>>,
}

impl AutosaveScheduler {
    pub fn new(service: ResumeService, period: Duration) -> Arc<Self> {
        Arc::new(Self {
            service,
            period,
            shutdown: Arc::new(Notify::new()),
            handle: tokio::sync::RwLock::new(None),
        })
    }

    pub fn with_default_period(service: ResumeService) -> Arc<Self> {
        Self::new(service, DEFAULT_AUTOSAVE_PERIOD)
    }

    /// Spawn the timer task. Calling `start` on a running scheduler is a
    /// logged no-op. The first batch fires one full period after start, not
    /// immediately.
    pub async fn start(&self) {
        let mut guard = self.handle.write().await;
        if guard.is_some() {
            warn!("autosave scheduler is already running");
            return;
        }

        let service = self.service.clone();
        let period = self.period;
        let shutdown = self.shutdown.clone();
        *guard = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            // A batch runs inside the tick arm, so shutdown is only observed
            // between ticks: in-flight saves always drain before exit.
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown.notified() => {
                        debug!("autosave loop exiting");
                        break;
                    }
                    _ = ticker.tick() => {
                        if service.autosave_once().await {
                            debug!("autosave batch completed");
                        } else {
                            debug!("autosave tick skipped, service not ready");
                        }
                    }
                }
            }
        }));
        info!("autosave scheduler started, period {:?}", period);
    }

    /// Cancel the pending timer. Idempotent; the handle is taken on the first
    /// call so the loop is signalled exactly once. An in-flight batch drains
    /// before the task exits; `stop` waits for it.
    pub async fn stop(&self) {
        let mut guard = self.handle.write().await;
        if let Some(handle) = guard.take() {
            self.shutdown.notify_one();
            if let Err(e) = handle.await {
                warn!("autosave task ended abnormally: {}", e);
            }
            info!("autosave scheduler stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}

impl Drop for AutosaveScheduler {
    /// Last-resort cancellation for exit paths that never called `stop`.
    fn drop(&mut self) {
        if let Some(handle) = self.handle.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resume::{keys, Section};
    use crate::infrastructure::storage::{MemoryStore, StoreLatency};

    async fn ready_service() -> (Arc<MemoryStore>, ResumeService) {
        let store = Arc::new(MemoryStore::new());
        let service = ResumeService::new(store.clone());
        service.hydrate().await.unwrap();
        (store, service)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_persist_all_sections() {
        let (store, service) = ready_service().await;
        let scheduler = AutosaveScheduler::new(service, Duration::from_secs(30));
        scheduler.start().await;

        // nothing before the first period elapses
        tokio::time::sleep(Duration::from_secs(29)).await;
        assert!(store.is_empty().await);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(store.len().await, 6);
        for section in Section::ALL {
            assert!(store.raw_get(section.key()).await.is_some());
        }

        scheduler.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_ignores_drafts() {
        let (store, service) = ready_service().await;
        service.begin_edit(Section::About).await.unwrap();
        service
            .set_about_draft("draft in progress".to_string())
            .await
            .unwrap();

        let scheduler = AutosaveScheduler::new(service.clone(), Duration::from_secs(30));
        scheduler.start().await;
        tokio::time::sleep(Duration::from_secs(31)).await;

        let stored = store.raw_get(keys::ABOUT).await.unwrap();
        assert_eq!(
            stored,
            serde_json::json!(crate::domain::resume::default_about())
        );
        scheduler.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent_and_halts_ticks() {
        let (store, service) = ready_service().await;
        let scheduler = AutosaveScheduler::new(service, Duration::from_secs(30));
        scheduler.start().await;
        assert!(scheduler.is_running().await);

        scheduler.stop().await;
        scheduler.stop().await;
        assert!(!scheduler.is_running().await);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(store.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_twice_keeps_single_task() {
        let (_store, service) = ready_service().await;
        let scheduler = AutosaveScheduler::new(service, Duration::from_secs(30));
        scheduler.start().await;
        scheduler.start().await;
        assert!(scheduler.is_running().await);
        scheduler.stop().await;
        assert!(!scheduler.is_running().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_drains_inflight_batch() {
        // slow saves so the batch is still running when stop is called
        let store = Arc::new(MemoryStore::with_latency(StoreLatency {
            save: Duration::from_secs(5),
            load: Duration::ZERO,
        }));
        let service = ResumeService::new(store.clone());
        service.hydrate().await.unwrap();

        let scheduler = AutosaveScheduler::new(service, Duration::from_secs(30));
        scheduler.start().await;

        // first tick fired at t=30; the six saves settle at t=35
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert!(store.is_empty().await);

        scheduler.stop().await;
        assert_eq!(store.len().await, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_autosave_while_loading() {
        let store = Arc::new(MemoryStore::new());
        let service = ResumeService::new(store.clone());
        // no hydrate: still Loading

        let scheduler = AutosaveScheduler::new(service, Duration::from_secs(30));
        scheduler.start().await;
        tokio::time::sleep(Duration::from_secs(95)).await;
        assert!(store.is_empty().await);
        scheduler.stop().await;
    }
}
