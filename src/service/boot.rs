use crate::adapter::{ProviderPaymentGateway, ProviderSeatReservation};
use crate::service::TicketService;

/// Wire the provider adapters into a ready-to-use ticket service.
///
/// - ProviderPaymentGateway (third-party payment stand-in)
/// - ProviderSeatReservation (third-party seat booking stand-in)
///
/// Tests build their own service with recording gateways instead.
pub fn boot() -> TicketService {
    let payment = Box::new(ProviderPaymentGateway::new());
    let seating = Box::new(ProviderSeatReservation::new());

    tracing::info!("Box office initialized");

    TicketService::new(payment, seating)
}
