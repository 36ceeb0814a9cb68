use serde::{Deserialize, Serialize};

use crate::domain::ValidatedTotals;

/// Unit prices in pence. Fixed configuration of the pricing policy, never
/// caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub adult_price: u64,
    pub child_price: u64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            adult_price: 2000,
            child_price: 1000,
        }
    }
}

impl PricingPolicy {
    /// Price validated totals. Infants travel free on an adult's lap, so
    /// they contribute to neither the amount nor the seat count.
    pub fn quote(&self, totals: &ValidatedTotals) -> PurchaseSummary {
        PurchaseSummary {
            quantity: totals.quantity,
            amount: u64::from(totals.adult) * self.adult_price
                + u64::from(totals.child) * self.child_price,
            seats: totals.adult + totals.child,
        }
    }
}

/// What a successful purchase returns: tickets issued, pence charged,
/// seats reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub quantity: u32,
    pub amount: u64,
    pub seats: u32,
}
