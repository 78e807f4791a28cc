//! View direction
//!
//! Ordered view-state mutations against the host, each followed by a
//! settle wait. The wait is a policy object so timing assumptions are
//! never hardcoded in the orchestration.

pub mod director;
pub mod settle;

pub use director::ViewDirector;
pub use settle::{FixedDelay, SettleStrategy};
