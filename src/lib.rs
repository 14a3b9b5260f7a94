//! Journal daemon data access
//!
//! Read-side data access for the journal daemon. Groups are looked up by
//! primary key from PostgreSQL through a [`daos::GroupDao`], which obtains
//! its database client and logger lazily from shared providers the first
//! time it is used.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), journal_daemon::DaoError> {
//! use journal_daemon::daos::group_dao;
//!
//! match group_dao::find(42).await? {
//!     Some(group) => println!("found {}", group.name),
//!     None => println!("no group 42"),
//! }
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Environment driven configuration
pub mod config;

// Tracing setup and the shared logger handle
pub mod logging;

// PostgreSQL client and repositories
pub mod database;

// Row models
pub mod models;

// Data access objects
pub mod daos;

pub use config::DaemonConfig;
pub use daos::group_dao::{find, shared_group_dao, GroupDao};
pub use error::{ConfigError, DaoError};
pub use models::Group;
