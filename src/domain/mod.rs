mod error;
mod pricing;
mod request;
mod totals;
mod validate;

pub use error::*;
pub use pricing::*;
pub use request::*;
pub use totals::*;
pub use validate::*;
