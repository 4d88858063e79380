use thiserror::Error;

// an exact fraction, kept in lowest terms with the sign on the numerator
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash)]
pub struct Rational {
    pub(crate) num: i64,
    pub(crate) den: u64,
}

#[derive(Error, Clone, Debug, PartialEq, Eq, Copy)]
pub enum RationalError {
    #[error("denominator is zero")]
    InvalidDenominator,
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    Overflow,
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

impl Rational {
    // a zero denominator collapses to the canonical zero, try_new is the strict form
    pub fn new(numerator: i64, denominator: i64) -> Self {
        let mut value = if denominator == 0 {
            Rational { num: 0, den: 1 }
        } else if denominator < 0 {
            Rational {
                num: -numerator,
                den: denominator.unsigned_abs(),
            }
        } else {
            Rational {
                num: numerator,
                den: denominator as u64,
            }
        };
        value.reduce();
        value
    }

    pub fn try_new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Self::new(numerator, denominator))
    }

    pub fn from_integer(value: i64) -> Self {
        Rational { num: value, den: 1 }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> u64 {
        self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    // narrowing one-way projection, there is no conversion back
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    pub fn abs(&self) -> Self {
        Rational {
            num: self.num.abs(),
            den: self.den,
        }
    }

    // panics if self is zero
    pub fn recip(&self) -> Self {
        if self.num == 0 {
            panic!("division by zero");
        }
        if self.num < 0 {
            Rational {
                num: -(self.den as i64),
                den: self.num.unsigned_abs(),
            }
        } else {
            Rational {
                num: self.den as i64,
                den: self.num as u64,
            }
        }
    }

    pub(crate) fn reduce(&mut self) {
        if self.num == 0 {
            self.den = 1;
            return;
        }

        let common = gcd(self.num.unsigned_abs(), self.den);
        self.num /= common as i64;
        self.den /= common;
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational { num: 0, den: 1 }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from_integer(value)
    }
}

#[test]
fn construction_reduces_to_lowest_terms() {
    let a = Rational::new(4, 8);
    assert_eq!(a.numerator(), 1);
    assert_eq!(a.denominator(), 2);

    let b = Rational::new(9, 12);
    assert_eq!(b.numerator(), 3);
    assert_eq!(b.denominator(), 4);
}

#[test]
fn sign_moves_into_the_numerator() {
    let a = Rational::new(3, -4);
    assert_eq!(a.numerator(), -3);
    assert_eq!(a.denominator(), 4);

    let b = Rational::new(-3, -4);
    assert_eq!(b.numerator(), 3);
    assert_eq!(b.denominator(), 4);
}

#[test]
fn zero_numerator_collapses_the_denominator() {
    let z = Rational::new(0, 5);
    assert_eq!(z.numerator(), 0);
    assert_eq!(z.denominator(), 1);
}

#[test]
fn zero_denominator_falls_back_to_zero() {
    assert_eq!(Rational::new(7, 0), Rational::default());
    assert_eq!(Rational::try_new(7, 0), Err(RationalError::InvalidDenominator));
    assert_eq!(Rational::try_new(3, -9), Ok(Rational::new(-1, 3)));
}

#[test]
fn integer_constructors() {
    assert_eq!(Rational::default().numerator(), 0);
    assert_eq!(Rational::default().denominator(), 1);

    let five = Rational::from_integer(5);
    assert_eq!(five.numerator(), 5);
    assert_eq!(five.denominator(), 1);
    assert!(five.is_integer());

    assert_eq!(Rational::from(-2), Rational::new(-2, 1));
    assert!(!Rational::new(1, 2).is_integer());
}

#[test]
fn float_projection() {
    assert_eq!(Rational::new(1, 2).to_f64(), 0.5);
    assert_eq!(Rational::new(-3, 4).to_f64(), -0.75);
    assert_eq!(Rational::default().to_f64(), 0.0);
}

#[test]
fn abs_and_recip() {
    assert_eq!(Rational::new(-3, 4).abs(), Rational::new(3, 4));
    assert_eq!(Rational::new(3, 4).abs(), Rational::new(3, 4));
    assert_eq!(Rational::new(-2, 5).recip(), Rational::new(-5, 2));
    assert_eq!(Rational::new(2, 5).recip(), Rational::new(5, 2));
    assert_eq!(Rational::new(4, 8).recip(), Rational::new(2, 1));
}

#[test]
#[should_panic(expected = "division by zero")]
fn recip_of_zero_panics() {
    let _ = Rational::default().recip();
}
