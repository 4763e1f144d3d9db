pub mod curriculum;
pub mod types;

pub use types::{Challenge, Clause, Outcome, MAX_ATTEMPTS};
