//! Console formatting of dates, times and amounts.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Day-first date, `dd.mm.yyyy`.
#[must_use]
pub fn date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Time of day with a dot separator, `HH.MM`.
#[must_use]
pub fn time(time: NaiveTime) -> String {
    time.format("%H.%M").to_string()
}

/// Amount with two decimals, a decimal comma and a trailing euro sign.
///
/// Halves are rounded away from zero.
///
/// ```
/// use reservations::report::format::euros;
/// use rust_decimal::Decimal;
///
/// assert_eq!(euros(Decimal::new(3700, 2)), "37,00 €");
/// assert_eq!(euros(Decimal::new(19995, 3)), "20,00 €");
/// ```
#[must_use]
pub fn euros(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2} €").replace('.', ",")
}

/// `Yes` / `No`.
#[must_use]
pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
