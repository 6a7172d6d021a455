//! Zipcode-to-rate-area mapping

mod data;
mod resolver;
pub mod loader;

pub use data::{RateAreaKey, ZipRecord};
pub use resolver::{RateAreaResolver, Resolution};
