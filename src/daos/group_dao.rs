//! Group DAO
//!
//! Looks up a single group by primary key. The DAO obtains its store and
//! logger from a [`ClientProvider`] and a [`LoggerProvider`] the first time
//! it is used; after that the same handles are kept for the lifetime of the
//! DAO. [`shared_group_dao`] and [`find`] expose one process-wide instance
//! wired to the PostgreSQL client and the tracing logger.

use std::sync::{Arc, OnceLock};

use tokio::sync::OnceCell;

use crate::database::{ClientProvider, GroupStore, PostgresClientProvider};
use crate::error::DaoError;
use crate::logging::{Logger, LoggerProvider, TracingLoggerProvider};
use crate::models::Group;

static GROUP_DAO: OnceLock<GroupDao> = OnceLock::new();

/// Handles obtained from the providers, set together exactly once
struct Dependencies {
    client: Arc<dyn GroupStore>,
    logger: Arc<Logger>,
}

pub struct GroupDao {
    client_provider: Arc<dyn ClientProvider>,
    logger_provider: Arc<dyn LoggerProvider>,
    dependencies: OnceCell<Dependencies>,
}

impl GroupDao {
    /// Create an uninitialised DAO; nothing is requested from the providers yet
    pub fn new(
        client_provider: Arc<dyn ClientProvider>,
        logger_provider: Arc<dyn LoggerProvider>,
    ) -> Self {
        Self {
            client_provider,
            logger_provider,
            dependencies: OnceCell::new(),
        }
    }

    /// DAO wired to the shared PostgreSQL client and tracing logger
    pub fn with_default_providers() -> Self {
        Self::new(
            Arc::new(PostgresClientProvider),
            Arc::new(TracingLoggerProvider),
        )
    }

    /// Obtain the logger and client from the providers if not done yet.
    ///
    /// Concurrent first callers wait on a single initialisation. If the
    /// client provider fails the DAO stays uninitialised and the error is
    /// returned; the next call asks the providers again.
    pub async fn ensure_initialized(&self) -> Result<(), DaoError> {
        self.load_dependencies().await.map(|_| ())
    }

    async fn load_dependencies(&self) -> Result<&Dependencies, DaoError> {
        self.dependencies
            .get_or_try_init(|| async {
                let logger = self.logger_provider.logger();
                let client = self.client_provider.client().await?;
                logger.debug("group dao initialised");
                Ok::<_, DaoError>(Dependencies { client, logger })
            })
            .await
    }

    pub fn is_initialized(&self) -> bool {
        self.dependencies.initialized()
    }

    /// Store handle, once initialised
    pub fn client(&self) -> Option<&Arc<dyn GroupStore>> {
        self.dependencies.get().map(|deps| &deps.client)
    }

    /// Logger handle, once initialised
    pub fn logger(&self) -> Option<&Arc<Logger>> {
        self.dependencies.get().map(|deps| &deps.logger)
    }

    /// Find a group by primary key.
    ///
    /// `Ok(None)` means no row has this id; a failed read is an `Err`. The id
    /// is passed to the store as given, zero included.
    pub async fn find_by_id(&self, id: u64) -> Result<Option<Group>, DaoError> {
        let deps = self.load_dependencies().await?;
        deps.client.first_by_id(id).await
    }
}

impl std::fmt::Debug for GroupDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupDao")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

/// Get the process-wide group DAO, initialising it if needed
pub async fn shared_group_dao() -> Result<&'static GroupDao, DaoError> {
    let dao = GROUP_DAO.get_or_init(GroupDao::with_default_providers);
    dao.ensure_initialized().await?;
    Ok(dao)
}

/// Find a group by primary key through the shared DAO
pub async fn find(id: u64) -> Result<Option<Group>, DaoError> {
    shared_group_dao().await?.find_by_id(id).await
}
