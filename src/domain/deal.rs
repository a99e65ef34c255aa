//! Deal transfer record.
//!
//! A [`Deal`] describes a marketplace listing priced below the reference
//! baseline for a card. Records are produced by the deals API and are
//! read-only on this side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique identifier of a detected deal.
pub type DealId = i64;

/// Identifier of a card catalog entry.
pub type CardId = i64;

/// A detected discount opportunity for a collectible card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub deal_id: DealId,
    pub card_id: CardId,
    /// Source marketplace name.
    pub marketplace: String,
    /// Listing link.
    pub url: String,
    /// Observed listing price in EUR.
    pub price_eur: Decimal,
    /// Reference fair price in EUR.
    pub baseline_eur: Decimal,
    /// Discount as a fraction of the baseline (0.15 means 15%).
    pub discount_pct: Decimal,
    pub card_name: String,
    pub set_name: String,
    pub number: String,
}

impl Deal {
    /// Discount implied by price and baseline: `(baseline - price) / baseline`.
    ///
    /// Returns `None` when the baseline is zero or negative, or when the
    /// quotient does not fit in a `Decimal`.
    #[must_use]
    pub fn expected_discount(&self) -> Option<Decimal> {
        if self.baseline_eur <= Decimal::ZERO {
            return None;
        }
        self.savings_eur()?.checked_div(self.baseline_eur)
    }

    /// True when the listing is priced at or below the baseline.
    #[must_use]
    pub fn is_below_baseline(&self) -> bool {
        self.price_eur <= self.baseline_eur
    }

    /// Savings against the baseline in EUR, `None` on overflow.
    #[must_use]
    pub fn savings_eur(&self) -> Option<Decimal> {
        self.baseline_eur.checked_sub(self.price_eur)
    }
}
