use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::UnknownTicketType;

/// Every rule a purchase request can break, one variant per cause.
///
/// The message text is the contract: callers of the service distinguish
/// failure reasons by message, not by variant, so these strings must not
/// drift.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseViolation {
    #[error("Account ID should be an integer greater than zero")]
    AccountId,
    #[error("Ticket type is required")]
    MissingRequests,
    #[error("Ticket type should be a non empty object")]
    MalformedRequest,
    #[error("type must be ADULT, CHILD, or INFANT")]
    UnknownTicketType,
    #[error("Child and infant tickets can only be purchased with an adult present")]
    AdultRequired,
    #[error("Infants cannot be more than adults")]
    InfantsExceedAdults,
    #[error("Quantity should be between 1 and 20")]
    QuantityOutOfRange,
}

/// The single error surface of `purchase_tickets`. Wraps whichever
/// violation was hit first; the display text is the violation's own.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{cause}")]
pub struct InvalidPurchase {
    pub cause: PurchaseViolation,
}

impl From<PurchaseViolation> for InvalidPurchase {
    fn from(cause: PurchaseViolation) -> Self {
        Self { cause }
    }
}

impl From<UnknownTicketType> for InvalidPurchase {
    fn from(_: UnknownTicketType) -> Self {
        PurchaseViolation::UnknownTicketType.into()
    }
}
