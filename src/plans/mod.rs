//! Plan catalog and per-area silver rate index

mod data;
mod index;
pub mod loader;

pub use data::{Plan, SILVER};
pub use index::SilverRateIndex;
