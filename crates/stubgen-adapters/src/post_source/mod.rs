//! Remote post listing adapters.

mod json;

pub use json::JsonPostSource;
