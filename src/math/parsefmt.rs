use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::rational::Rational;

// "0", "5", "1/2", "-3/4"
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator() == 1 {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseRationalError {
    #[error("invalid rational literal")]
    Invalid,
    #[error("denominator is zero")]
    ZeroDenominator,
}

// accepts "n" or "n/d", the denominator may carry a sign
impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Rational, ParseRationalError> {
        let mut split = s.splitn(2, '/');

        let num = split.next().unwrap_or("");
        let num = i64::from_str(num).map_err(|_| ParseRationalError::Invalid)?;

        let den = split.next().unwrap_or("1");
        let den = i64::from_str(den).map_err(|_| ParseRationalError::Invalid)?;

        if den == 0 {
            return Err(ParseRationalError::ZeroDenominator);
        }
        Ok(Rational::new(num, den))
    }
}

#[test]
fn fmt_test() {
    assert_eq!(Rational::new(5, 1).to_string(), "5");
    assert_eq!(Rational::new(0, 1).to_string(), "0");
    assert_eq!(Rational::new(1, 2).to_string(), "1/2");
    assert_eq!(Rational::new(-3, 4).to_string(), "-3/4");
    assert_eq!(Rational::new(2, -4).to_string(), "-1/2");
}

#[test]
fn parse_test() {
    assert_eq!("5".parse(), Ok(Rational::new(5, 1)));
    assert_eq!("1/2".parse(), Ok(Rational::new(1, 2)));
    assert_eq!("-3/4".parse(), Ok(Rational::new(-3, 4)));
    assert_eq!("4/8".parse(), Ok(Rational::new(1, 2)));
    assert_eq!("9/-12".parse(), Ok(Rational::new(-3, 4)));

    assert_eq!("1/0".parse::<Rational>(), Err(ParseRationalError::ZeroDenominator));
    assert_eq!("".parse::<Rational>(), Err(ParseRationalError::Invalid));
    assert_eq!("a/b".parse::<Rational>(), Err(ParseRationalError::Invalid));
    assert_eq!("1.5".parse::<Rational>(), Err(ParseRationalError::Invalid));
}
