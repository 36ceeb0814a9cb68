use crate::domain::{
    AggregatedTotals, InvalidPurchase, PricingPolicy, PurchaseSummary, TicketTypeRequest,
    check_account, check_presence, check_totals,
};
use crate::port::{PaymentGateway, SeatReservation};

/// The purchase entry point: validates, prices, then delegates to the
/// payment and seat reservation gateways.
///
/// Holds no per-call state. Totals are aggregated locally inside each
/// `purchase_tickets` call, so consecutive purchases cannot leak counts
/// into one another.
pub struct TicketService {
    payment: Box<dyn PaymentGateway>,
    seating: Box<dyn SeatReservation>,
    policy: PricingPolicy,
}

impl TicketService {
    pub fn new(payment: Box<dyn PaymentGateway>, seating: Box<dyn SeatReservation>) -> Self {
        Self::with_policy(payment, seating, PricingPolicy::default())
    }

    pub fn with_policy(
        payment: Box<dyn PaymentGateway>,
        seating: Box<dyn SeatReservation>,
        policy: PricingPolicy,
    ) -> Self {
        Self {
            payment,
            seating,
            policy,
        }
    }

    pub fn policy(&self) -> PricingPolicy {
        self.policy
    }

    /// Validate and price one purchase, then charge the account and
    /// reserve the seats, payment strictly first.
    ///
    /// Checks run in a fixed order and the first failure wins: account,
    /// presence, then the aggregated-total rules (composition before
    /// quantity range). Neither gateway is touched unless every rule
    /// passes, so a failed purchase has zero side effects.
    pub fn purchase_tickets(
        &self,
        account_id: u64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, InvalidPurchase> {
        check_account(account_id)?;
        check_presence(requests)?;

        let totals = AggregatedTotals::from_requests(requests)?;
        let validated = check_totals(&totals)?;
        let summary = self.policy.quote(&validated);

        self.payment.make_payment(account_id, summary.amount);
        self.seating.reserve_seat(account_id, summary.seats);

        tracing::info!(
            account_id,
            quantity = summary.quantity,
            amount = summary.amount,
            seats = summary.seats,
            "purchase completed"
        );

        Ok(summary)
    }
}
