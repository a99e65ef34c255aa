//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Deal`] records so tests focus
//! on assertions rather than construction boilerplate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{Deal, DealId};

/// A consistent deal: 5.00 € against a 10.00 € baseline, 50% off.
pub fn deal(id: DealId) -> Deal {
    Deal {
        deal_id: id,
        card_id: 10,
        marketplace: "X".to_string(),
        url: "http://x".to_string(),
        price_eur: dec!(5),
        baseline_eur: dec!(10),
        discount_pct: dec!(0.5),
        card_name: "Pikachu".to_string(),
        set_name: "Base".to_string(),
        number: "25".to_string(),
    }
}

/// A deal priced against a baseline, with the discount derived from both.
pub fn priced_deal(id: DealId, price: Decimal, baseline: Decimal) -> Deal {
    let discount = if baseline > Decimal::ZERO {
        (baseline - price) / baseline
    } else {
        Decimal::ZERO
    };
    Deal {
        price_eur: price,
        baseline_eur: baseline,
        discount_pct: discount,
        ..deal(id)
    }
}

/// The demo record the deals API seeds: Charizard 4/102 at 220 € vs 300 €.
pub fn charizard(id: DealId) -> Deal {
    Deal {
        deal_id: id,
        card_id: 1,
        marketplace: "DEMO".to_string(),
        url: "https://example.com/listing/123".to_string(),
        price_eur: dec!(220),
        baseline_eur: dec!(300),
        discount_pct: (dec!(300) - dec!(220)) / dec!(300),
        card_name: "Charizard".to_string(),
        set_name: "Base Set".to_string(),
        number: "4/102".to_string(),
    }
}

/// Serialize deals as the JSON array the deals API returns.
pub fn deals_json(deals: &[Deal]) -> String {
    serde_json::to_string(deals).unwrap_or_else(|_| "[]".to_string())
}
