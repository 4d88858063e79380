pub mod rational;
pub mod ops;
pub mod parsefmt;

pub type Num = rational::Rational;
