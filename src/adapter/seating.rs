use crate::port::SeatReservation;

/// Stand-in for the provider's seat booking service.
#[derive(Debug, Default)]
pub struct ProviderSeatReservation;

impl ProviderSeatReservation {
    pub fn new() -> Self {
        Self
    }
}

impl SeatReservation for ProviderSeatReservation {
    fn reserve_seat(&self, account_id: u64, seat_count: u32) {
        tracing::info!(account_id, seat_count, "seats reserved");
    }
}
