//! External integrations
//!
//! Adapters wrap external collaborators behind domain traits so the core
//! orchestration logic stays host-independent and testable.

pub mod host;
