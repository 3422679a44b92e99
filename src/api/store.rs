//! Result storage for later CSV download.
//!
//! Computed reports are kept under a generated job id so the client can
//! fetch the CSV rendering afterwards. The store is an injected abstraction
//! rather than a module-level map, and the in-memory implementation carries
//! an explicit expiry policy: entries older than the TTL are evicted on
//! every access instead of living forever.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::models::AttendanceReport;

/// Key-value storage of computed reports, keyed by job id.
pub trait ResultStore: Send + Sync {
    /// Stores a report under a job id.
    fn insert(&self, job_id: Uuid, report: AttendanceReport);

    /// Fetches the report for a job id, if present and not expired.
    fn get(&self, job_id: &Uuid) -> Option<AttendanceReport>;
}

/// In-memory [`ResultStore`] with TTL-based eviction.
pub struct InMemoryResultStore {
    ttl: Duration,
    entries: Mutex<HashMap<Uuid, (Instant, AttendanceReport)>>,
}

/// How long a stored report stays downloadable.
pub const DEFAULT_RESULT_TTL: Duration = Duration::from_secs(60 * 60);

impl InMemoryResultStore {
    /// Creates a store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, (Instant, AttendanceReport)>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn evict_expired(entries: &mut HashMap<Uuid, (Instant, AttendanceReport)>, ttl: Duration) {
        let now = Instant::now();
        entries.retain(|_, (stored_at, _)| now.duration_since(*stored_at) < ttl);
    }
}

impl Default for InMemoryResultStore {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_TTL)
    }
}

impl ResultStore for InMemoryResultStore {
    fn insert(&self, job_id: Uuid, report: AttendanceReport) {
        let mut entries = self.lock();
        Self::evict_expired(&mut entries, self.ttl);
        entries.insert(job_id, (Instant::now(), report));
    }

    fn get(&self, job_id: &Uuid) -> Option<AttendanceReport> {
        let mut entries = self.lock();
        Self::evict_expired(&mut entries, self.ttl);
        entries.get(job_id).map(|(_, report)| report.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShiftPolicy;
    use crate::models::Summary;

    fn sample_report() -> AttendanceReport {
        AttendanceReport {
            employee_name: None,
            policy_used: ShiftPolicy::default(),
            summary: Summary::empty(),
            day_level: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn test_insert_then_get() {
        let store = InMemoryResultStore::default();
        let job_id = Uuid::new_v4();
        store.insert(job_id, sample_report());
        assert!(store.get(&job_id).is_some());
    }

    #[test]
    fn test_unknown_id_is_none() {
        let store = InMemoryResultStore::default();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let store = InMemoryResultStore::new(Duration::ZERO);
        let job_id = Uuid::new_v4();
        store.insert(job_id, sample_report());
        assert!(store.get(&job_id).is_none());
    }

    #[test]
    fn test_store_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryResultStore>();
    }
}
