//! Row models read by the journal daemon

pub mod group;

pub use group::Group;
