/// Step between y-axis labels, in whole currency units.
pub const Y_AXIS_STEP: i64 = 1000;

/// Maximum number of pages shown without eliding any.
pub const MAX_VISIBLE_PAGES: u32 = 7;

/// Marker rendered in place of an elided page range.
pub const ELLIPSIS: &str = "...";

/// Decimal precision for display amounts.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Locale tag used when the caller does not supply one.
pub const DEFAULT_LOCALE: &str = "en-US";
