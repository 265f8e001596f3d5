//! Formatting module - currency, date, number, and text rendering helpers.

mod currency;
mod date;
mod number;
mod text;

pub use currency::format_currency;
pub use date::{format_date, format_date_to_local};
pub use number::{format_number_with_commas, to_ordinal};
pub use text::capitalize_first_letter;
