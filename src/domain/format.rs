//! Display formatting for deal fields.
//!
//! Shared by the HTML page and the terminal table so both surfaces show the
//! same strings for the same record.

use rust_decimal::{Decimal, RoundingStrategy};

use super::deal::Deal;

/// Format a EUR amount with two decimals, e.g. `5` -> `5.00 €`.
#[must_use]
pub fn price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2} €", normalize_zero(rounded))
}

/// Shown in place of a value that cannot be represented.
pub const UNAVAILABLE: &str = "n/d";

/// Format a discount fraction as a rounded integer percentage, e.g. `0.15` -> `15%`.
///
/// Fractions too large to scale by 100 render as [`UNAVAILABLE`].
#[must_use]
pub fn percent(fraction: Decimal) -> String {
    match fraction.checked_mul(Decimal::ONE_HUNDRED) {
        Some(scaled) => {
            let rounded = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            format!("{}%", normalize_zero(rounded).normalize())
        }
        None => UNAVAILABLE.to_string(),
    }
}

/// Card identification line, e.g. `Pikachu (25) – Base`.
#[must_use]
pub fn card_label(deal: &Deal) -> String {
    format!("{} ({}) – {}", deal.card_name, deal.number, deal.set_name)
}

// -0.00 and -0 read badly
fn normalize_zero(value: Decimal) -> Decimal {
    if value.is_zero() {
        Decimal::ZERO
    } else {
        value
    }
}
