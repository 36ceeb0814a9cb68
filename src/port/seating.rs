/// Third-party seat reservation service.
///
/// Called at most once per purchase, always after payment. Which seats
/// get allocated is the provider's business; the core only hands over a
/// count.
pub trait SeatReservation: Send + Sync {
    fn reserve_seat(&self, account_id: u64, seat_count: u32);
}
