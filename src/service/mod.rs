mod boot;
pub mod mock;
mod orchestrator;
mod ticket;

pub use boot::*;
pub use orchestrator::*;
pub use ticket::*;
