use crate::domain::{InvalidPurchase, PurchaseViolation, TicketType, TicketTypeRequest};

/// Per-type totals for one purchase call.
///
/// Built fresh from the request lines on every call and dropped once the
/// purchase completes; totals are never carried on the service between
/// calls. Quantity is the sum of every line's count, negatives included,
/// so the range check sees exactly what the caller asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregatedTotals {
    pub adult: i64,
    pub child: i64,
    pub infant: i64,
    pub quantity: i64,
}

impl AggregatedTotals {
    /// Sum counts per type across the request lines. Pure and
    /// order-invariant; duplicate lines for the same type accumulate.
    ///
    /// Counts are caller-supplied, so the sums are checked: a total that
    /// overflows `i64` can never be in [1, 20] and is rejected with the
    /// quantity violation rather than wrapping into a passable value.
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Result<Self, InvalidPurchase> {
        let mut totals = Self::default();

        for request in requests {
            let count = request.count();
            totals.quantity = add_count(totals.quantity, count)?;

            match request.ticket_type() {
                TicketType::Adult => totals.adult = add_count(totals.adult, count)?,
                TicketType::Child => totals.child = add_count(totals.child, count)?,
                TicketType::Infant => totals.infant = add_count(totals.infant, count)?,
            }
        }

        Ok(totals)
    }
}

fn add_count(total: i64, count: i64) -> Result<i64, InvalidPurchase> {
    total
        .checked_add(count)
        .ok_or_else(|| PurchaseViolation::QuantityOutOfRange.into())
}
