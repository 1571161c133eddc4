//! Decoded spreadsheet rows exchanged as JSON.

mod json;

pub use json::JsonRows;
