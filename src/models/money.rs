//! Currency and rate formatting
//!
//! Amounts are plain `f64` values. These helpers give every report the same
//! two-decimal rendering: a leading `$` for currency and a trailing `%` for
//! rates. The sign follows the `$`, so a withdrawal of 300 renders as
//! `$-300.00`.

/// Format a currency amount with a `$` prefix and two decimals
///
/// # Examples
/// ```
/// use passbook::models::money::format_currency;
/// assert_eq!(format_currency(1200.0), "$1200.00");
/// assert_eq!(format_currency(-300.0), "$-300.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a percentage rate with two decimals and a `%` suffix
///
/// # Examples
/// ```
/// use passbook::models::money::format_rate;
/// assert_eq!(format_rate(5.0), "5.00%");
/// ```
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate)
}

/// Format a duration in years with two decimals
pub fn format_years(years: f64) -> String {
    format!("{:.2} years", years)
}
