mod payment;
mod seating;

pub use payment::*;
pub use seating::*;
