//! exact rational arithmetic on an i64/u64 numerator/denominator pair
pub mod math;

pub use math::parsefmt::ParseRationalError;
pub use math::rational::{Rational, RationalError};
