//! Keypad calculator for treasurers tallying contributions.
//!
//! Mirrors a pocket calculator: operators chain left to right, there is no
//! precedence, and every value is a `Decimal`.

mod keypad;
mod operator;

pub use keypad::Calculator;
pub use operator::Operator;
