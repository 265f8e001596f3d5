use super::number::group_thousands;

/// Formats an amount in minor units (cents) as a USD display string,
/// following the en-US convention: `$` prefix, comma thousands grouping,
/// two fraction digits, and a leading `-` for negative amounts.
///
/// The currency/locale pairing is fixed; amounts are stored in cents
/// throughout the dashboard and divided by 100 here.
///
/// # Examples
///
/// ```
/// use dashkit_core::formatting::format_currency;
///
/// assert_eq!(format_currency(150), "$1.50");
/// assert_eq!(format_currency(-123456789), "-$1,234,567.89");
/// ```
pub fn format_currency(amount: i64) -> String {
    let minor = amount.unsigned_abs();
    let dollars = group_thousands(minor / 100);
    let cents = minor % 100;
    if amount < 0 {
        format!("-${}.{:02}", dollars, cents)
    } else {
        format!("${}.{:02}", dollars, cents)
    }
}
