//! Charts module - revenue series model and axis generation.

mod charts_model;
mod y_axis;

pub use charts_model::{Revenue, YAxis};
pub use y_axis::generate_y_axis;
