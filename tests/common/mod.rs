//! Shared test utilities and helpers
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use boxoffice::domain::{
    InvalidPurchase, PurchaseSummary, TicketType, TicketTypeRequest,
};
use boxoffice::port::{PaymentGateway, SeatReservation};
use boxoffice::service::TicketService;

/// Call log shared between the recording gateways and the test body.
#[derive(Debug, Default)]
pub struct GatewayLog {
    payments: Mutex<Vec<(u64, u64)>>,
    reservations: Mutex<Vec<(u64, u32)>>,
    sequence: Mutex<Vec<&'static str>>,
}

impl GatewayLog {
    /// (account_id, amount) pairs the payment gateway saw
    pub fn payment_calls(&self) -> Vec<(u64, u64)> {
        self.payments.lock().unwrap().clone()
    }

    /// (account_id, seat_count) pairs the reservation service saw
    pub fn reservation_calls(&self) -> Vec<(u64, u32)> {
        self.reservations.lock().unwrap().clone()
    }

    /// Gateway invocations in the order they happened
    pub fn call_sequence(&self) -> Vec<&'static str> {
        self.sequence.lock().unwrap().clone()
    }

    /// Assert that neither gateway was invoked
    pub fn assert_no_side_effects(&self) {
        assert!(
            self.payment_calls().is_empty(),
            "Payment gateway should not have been called"
        );
        assert!(
            self.reservation_calls().is_empty(),
            "Seat reservation should not have been called"
        );
    }
}

/// Build a ticket service wired to recording gateways, returning the log
/// alongside it for call assertions.
pub fn recording_service() -> (TicketService, Arc<GatewayLog>) {
    let log = Arc::new(GatewayLog::default());
    let service = TicketService::new(
        Box::new(RecordingPayment(log.clone())),
        Box::new(RecordingSeating(log.clone())),
    );

    (service, log)
}

pub struct RecordingPayment(Arc<GatewayLog>);

impl PaymentGateway for RecordingPayment {
    fn make_payment(&self, account_id: u64, amount: u64) {
        self.0.payments.lock().unwrap().push((account_id, amount));
        self.0.sequence.lock().unwrap().push("payment");
    }
}

pub struct RecordingSeating(Arc<GatewayLog>);

impl SeatReservation for RecordingSeating {
    fn reserve_seat(&self, account_id: u64, seat_count: u32) {
        self.0
            .reservations
            .lock()
            .unwrap()
            .push((account_id, seat_count));
        self.0.sequence.lock().unwrap().push("reservation");
    }
}

/// Test context wiring a ticket service to recording gateway stubs
pub struct TestContext {
    pub service: TicketService,
    log: Arc<GatewayLog>,
}

impl TestContext {
    pub fn new() -> Self {
        let (service, log) = recording_service();
        Self { service, log }
    }

    pub fn purchase(
        &self,
        account_id: u64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, InvalidPurchase> {
        self.service.purchase_tickets(account_id, requests)
    }

    /// (account_id, amount) pairs the payment gateway saw
    pub fn payment_calls(&self) -> Vec<(u64, u64)> {
        self.log.payment_calls()
    }

    /// (account_id, seat_count) pairs the reservation service saw
    pub fn reservation_calls(&self) -> Vec<(u64, u32)> {
        self.log.reservation_calls()
    }

    /// Gateway invocations in the order they happened
    pub fn call_sequence(&self) -> Vec<&'static str> {
        self.log.call_sequence()
    }

    /// Assert that neither gateway was invoked
    pub fn assert_no_side_effects(&self) {
        self.log.assert_no_side_effects();
    }
}

/// Helper to create an adult request line
pub fn adult(count: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Adult, count)
}

/// Helper to create a child request line
pub fn child(count: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Child, count)
}

/// Helper to create an infant request line
pub fn infant(count: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Infant, count)
}

/// Assert that a purchase fails with the given message
macro_rules! assert_fails_with {
    ($ctx:expr, $account:expr, $requests:expr, $message:expr) => {
        match $ctx.purchase($account, $requests) {
            Ok(summary) => panic!("Expected purchase to fail but it returned {:?}", summary),
            Err(e) => assert_eq!(e.to_string(), $message, "Wrong violation message"),
        }
    };
}

pub(crate) use assert_fails_with;
