//! Count accumulation
//!
//! The count is volatile: it starts at zero on power-up and is only changed
//! by completed passes and by an explicit reset.

pub mod stats;
pub mod store;

pub use stats::PassStats;
pub use store::CountStore;
