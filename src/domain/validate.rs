use crate::domain::{AggregatedTotals, InvalidPurchase, PurchaseViolation, TicketTypeRequest};

/// Totals that passed every business rule. Only this type can be priced,
/// so an unvalidated purchase cannot reach the gateways by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedTotals {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
    pub quantity: u32,
}

/// Account identifiers are opaque; zero is the only value ruled out.
pub fn check_account(account_id: u64) -> Result<(), InvalidPurchase> {
    if account_id == 0 {
        return Err(PurchaseViolation::AccountId.into());
    }
    Ok(())
}

/// A purchase must carry at least one request line. Runs before
/// aggregation, which assumes well-formed input.
pub fn check_presence(requests: &[TicketTypeRequest]) -> Result<(), InvalidPurchase> {
    if requests.is_empty() {
        return Err(PurchaseViolation::MissingRequests.into());
    }
    Ok(())
}

/// Apply the business rules to the aggregated totals, first failure wins.
///
/// Composition is checked before the quantity range, so when both are
/// broken at once the composition violation is the one reported. Negative
/// per-type totals surface with the quantity message, same as a total
/// outside [1, 20].
pub fn check_totals(totals: &AggregatedTotals) -> Result<ValidatedTotals, InvalidPurchase> {
    if (totals.child > 0 || totals.infant > 0) && totals.adult <= 0 {
        return Err(PurchaseViolation::AdultRequired.into());
    }

    if totals.infant > totals.adult {
        return Err(PurchaseViolation::InfantsExceedAdults.into());
    }

    if !(1..=20).contains(&totals.quantity) {
        return Err(PurchaseViolation::QuantityOutOfRange.into());
    }

    Ok(ValidatedTotals {
        adult: non_negative(totals.adult)?,
        child: non_negative(totals.child)?,
        infant: non_negative(totals.infant)?,
        quantity: non_negative(totals.quantity)?,
    })
}

fn non_negative(count: i64) -> Result<u32, InvalidPurchase> {
    u32::try_from(count).map_err(|_| PurchaseViolation::QuantityOutOfRange.into())
}
