//! Record audit settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::audit::{AuditRules, DEFAULT_DISCOUNT_TOLERANCE, DEFAULT_MIN_DISCOUNT};

/// Audit thresholds applied to every loaded snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Log findings at `warn` when a snapshot loads.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Accepted distance between reported and implied discount.
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,

    /// Flag discounts below this fraction. Zero disables the check.
    #[serde(default = "default_min_discount")]
    pub min_discount: Decimal,
}

const fn default_enabled() -> bool {
    true
}

const fn default_tolerance() -> Decimal {
    DEFAULT_DISCOUNT_TOLERANCE
}

const fn default_min_discount() -> Decimal {
    DEFAULT_MIN_DISCOUNT
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            tolerance: default_tolerance(),
            min_discount: default_min_discount(),
        }
    }
}

impl AuditConfig {
    #[must_use]
    pub fn rules(&self) -> AuditRules {
        AuditRules {
            tolerance: self.tolerance,
            min_discount: (!self.min_discount.is_zero()).then_some(self.min_discount),
        }
    }
}
