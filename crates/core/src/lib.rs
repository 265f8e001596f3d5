//! Dashkit Core - Display and data-shaping utilities for the dashboard.
//!
//! This crate contains the presentation helpers shared by the Dashkit
//! frontends: currency/date/number formatting, chart axis generation,
//! pagination sequences, and a handful of collection helpers. Everything
//! here is a pure transformation except the [`debounce::Debouncer`],
//! which owns a single pending timer task.

pub mod charts;
pub mod collections;
pub mod constants;
pub mod debounce;
pub mod errors;
pub mod formatting;
pub mod pagination;
pub mod utils;

// Re-export the main entry points
pub use charts::{generate_y_axis, Revenue, YAxis};
pub use debounce::Debouncer;
pub use pagination::{generate_pagination, PageItem};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
