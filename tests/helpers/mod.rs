//! Shared test doubles for DAO tests
//!
//! An in-memory group store plus client/logger providers that count how
//! often they are asked for a handle.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use journal_daemon::database::{ClientProvider, GroupStore};
use journal_daemon::logging::{Logger, LoggerProvider};
use journal_daemon::{DaoError, Group};

/// Group store backed by a map, recording every id it is asked for
#[derive(Default)]
pub struct MemoryGroupStore {
    rows: BTreeMap<u64, Group>,
    requested: Mutex<Vec<u64>>,
    fail_reads: bool,
}

impl MemoryGroupStore {
    pub fn seeded(groups: impl IntoIterator<Item = Group>) -> Self {
        Self {
            rows: groups.into_iter().map(|g| (g.id, g)).collect(),
            ..Self::default()
        }
    }

    /// Store whose every read fails like a dropped connection
    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn requested_ids(&self) -> Vec<u64> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl GroupStore for MemoryGroupStore {
    async fn first_by_id(&self, id: u64) -> Result<Option<Group>, DaoError> {
        self.requested.lock().unwrap().push(id);
        if self.fail_reads {
            return Err(DaoError::Read {
                entity: "group",
                id,
                source: sqlx::Error::PoolTimedOut,
            });
        }
        Ok(self.rows.get(&id).cloned())
    }
}

/// Client provider handing out one shared store, counting calls
pub struct CountingClientProvider {
    store: Arc<dyn GroupStore>,
    calls: AtomicUsize,
    failures_left: AtomicUsize,
}

impl CountingClientProvider {
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self {
            store,
            calls: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(0),
        }
    }

    /// Fail the first `n` requests with a connect error
    pub fn failing_first(store: Arc<dyn GroupStore>, n: usize) -> Self {
        let provider = Self::new(store);
        provider.failures_left.store(n, Ordering::SeqCst);
        provider
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientProvider for CountingClientProvider {
    async fn client(&self) -> Result<Arc<dyn GroupStore>, DaoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(DaoError::Connect(sqlx::Error::PoolClosed));
        }
        Ok(self.store.clone())
    }
}

/// Logger provider handing out one shared logger, counting calls
pub struct CountingLoggerProvider {
    logger: Arc<Logger>,
    calls: AtomicUsize,
}

impl CountingLoggerProvider {
    pub fn new() -> Self {
        Self {
            logger: Arc::new(Logger::new("group_dao_test")),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LoggerProvider for CountingLoggerProvider {
    fn logger(&self) -> Arc<Logger> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.logger.clone()
    }
}
