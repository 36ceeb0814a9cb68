use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

/// Raised at request construction, before any purchase validation runs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("type must be ADULT, CHILD, or INFANT")]
pub struct UnknownTicketType;

impl FromStr for TicketType {
    type Err = UnknownTicketType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            _ => Err(UnknownTicketType),
        }
    }
}

impl Display for TicketType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        };
        f.write_str(label)
    }
}

/// One line of a purchase request: a ticket type and how many of it.
///
/// Counts are signed: a negative count is a caller mistake, but it must
/// reach the validator so it is rejected with the quantity message rather
/// than failing here with an unrelated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: i64,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: i64) -> Self {
        Self { ticket_type, count }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}
