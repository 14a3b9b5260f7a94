//! Data access objects
//!
//! DAOs own no resources themselves: they hold shared handles to the
//! database client and logger, obtained from providers on first use.

pub mod group_dao;

pub use group_dao::GroupDao;
