//! Consistency checks for received deal records.
//!
//! The deals API owns the records; the viewer never rejects or rewrites them.
//! An audit only reports where a record departs from the deal convention:
//! price at or below baseline, and `discount_pct == (baseline - price) / baseline`.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::deal::{Deal, DealId};

/// Tolerance used when comparing reported and implied discounts.
pub const DEFAULT_DISCOUNT_TOLERANCE: Decimal = dec!(0.005);

/// Minimum discount for a listing to count as a deal.
pub const DEFAULT_MIN_DISCOUNT: Decimal = dec!(0.2);

/// Thresholds applied by [`audit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditRules {
    /// Maximum accepted distance between reported and implied discount.
    pub tolerance: Decimal,
    /// Flag records whose reported discount is below this value.
    pub min_discount: Option<Decimal>,
}

impl Default for AuditRules {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_DISCOUNT_TOLERANCE,
            min_discount: Some(DEFAULT_MIN_DISCOUNT),
        }
    }
}

/// One observation about a record that departs from the convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// Listing price exceeds the baseline.
    AbovePrice { price: Decimal, baseline: Decimal },
    /// Baseline is zero or negative, so no discount is defined.
    NonPositiveBaseline { baseline: Decimal },
    /// Price and baseline imply a discount outside the `Decimal` range.
    DiscountOutOfRange { price: Decimal, baseline: Decimal },
    /// Reported discount disagrees with price and baseline.
    DiscountMismatch { expected: Decimal, reported: Decimal },
    /// Reported discount is below the configured threshold.
    BelowThreshold { discount: Decimal, threshold: Decimal },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbovePrice { price, baseline } => {
                write!(f, "price {price} exceeds baseline {baseline}")
            }
            Self::NonPositiveBaseline { baseline } => {
                write!(f, "baseline {baseline} is not positive")
            }
            Self::DiscountOutOfRange { price, baseline } => write!(
                f,
                "discount implied by price {price} and baseline {baseline} is out of range"
            ),
            Self::DiscountMismatch { expected, reported } => write!(
                f,
                "reported discount {reported} differs from implied {}",
                expected.round_dp(4)
            ),
            Self::BelowThreshold {
                discount,
                threshold,
            } => write!(f, "discount {discount} below threshold {threshold}"),
        }
    }
}

/// Findings for a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordAudit {
    pub deal_id: DealId,
    pub findings: Vec<Finding>,
}

/// Check one record against the rules.
#[must_use]
pub fn check(deal: &Deal, rules: &AuditRules) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !deal.is_below_baseline() {
        findings.push(Finding::AbovePrice {
            price: deal.price_eur,
            baseline: deal.baseline_eur,
        });
    }

    if deal.baseline_eur <= Decimal::ZERO {
        findings.push(Finding::NonPositiveBaseline {
            baseline: deal.baseline_eur,
        });
    } else {
        match deal.expected_discount() {
            Some(expected) => {
                let within = deal
                    .discount_pct
                    .checked_sub(expected)
                    .is_some_and(|gap| gap.abs() <= rules.tolerance);
                if !within {
                    findings.push(Finding::DiscountMismatch {
                        expected,
                        reported: deal.discount_pct,
                    });
                }
            }
            None => findings.push(Finding::DiscountOutOfRange {
                price: deal.price_eur,
                baseline: deal.baseline_eur,
            }),
        }
    }

    if let Some(threshold) = rules.min_discount {
        if deal.discount_pct < threshold {
            findings.push(Finding::BelowThreshold {
                discount: deal.discount_pct,
                threshold,
            });
        }
    }

    findings
}

/// Audit a snapshot, returning only the records with findings, in input order.
#[must_use]
pub fn audit(deals: &[Deal], rules: &AuditRules) -> Vec<RecordAudit> {
    deals
        .iter()
        .filter_map(|deal| {
            let findings = check(deal, rules);
            (!findings.is_empty()).then(|| RecordAudit {
                deal_id: deal.deal_id,
                findings,
            })
        })
        .collect()
}
