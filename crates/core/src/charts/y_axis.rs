use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::charts_model::{Revenue, YAxis};
use crate::constants::Y_AXIS_STEP;
use crate::errors::{Error, Result};

/// Derives the y-axis for the revenue chart from a series of monthly
/// records.
///
/// The ceiling is the highest revenue rounded up to the next multiple of
/// 1000; labels run from the ceiling down to zero in steps of 1000,
/// rendered as `"$<value/1000>K"`.
///
/// An empty series has no maximum and is rejected with
/// [`Error::EmptyInput`].
pub fn generate_y_axis(revenue: &[Revenue]) -> Result<YAxis> {
    let highest = revenue
        .iter()
        .map(|record| record.revenue)
        .max()
        .ok_or_else(|| Error::EmptyInput("revenue series has no records".to_string()))?;

    let step = Decimal::from(Y_AXIS_STEP);
    let ceiling = (highest / step).ceil() * step;
    let top_label = ceiling
        .to_i64()
        .ok_or_else(|| Error::Overflow(format!("y-axis ceiling {} does not fit in i64", ceiling)))?;

    let mut labels = Vec::new();
    let mut value = top_label;
    while value >= 0 {
        labels.push(format!("${}K", value / Y_AXIS_STEP));
        value -= Y_AXIS_STEP;
    }

    Ok(YAxis { labels, top_label })
}
