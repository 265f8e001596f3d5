//! Chart domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of revenue, as consumed by the revenue chart.
/// The field names are the structural contract with the data layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Revenue {
    pub month: String,
    pub revenue: Decimal,
}

/// Y-axis description for the revenue chart: the labels to render, top
/// to bottom, and the axis ceiling they were derived from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub labels: Vec<String>,
    pub top_label: i64,
}
