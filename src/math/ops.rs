use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::ops::checked::*;
use num_traits::{One, Zero};

use super::rational::{Rational, RationalError};

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        let mut result = self;
        result += other;
        result
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        let mut result = self;
        result -= other;
        result
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        let mut result = self;
        result *= other;
        result
    }
}

impl Div for Rational {
    type Output = Rational;

    fn div(self, other: Rational) -> Rational {
        let mut result = self;
        result /= other;
        result
    }
}

// a/b + c/d = (a*d + c*b)/(b*d)
impl AddAssign for Rational {
    fn add_assign(&mut self, other: Rational) {
        let num = self.num * other.den as i64 + other.num * self.den as i64;
        let den = self.den * other.den;

        self.num = num;
        self.den = den;
        self.reduce();
    }
}

// a/b - c/d = (a*d - c*b)/(b*d)
impl SubAssign for Rational {
    fn sub_assign(&mut self, other: Rational) {
        let num = self.num * other.den as i64 - other.num * self.den as i64;
        let den = self.den * other.den;

        self.num = num;
        self.den = den;
        self.reduce();
    }
}

// (a/b) * (c/d) = (a*c)/(b*d)
impl MulAssign for Rational {
    fn mul_assign(&mut self, other: Rational) {
        self.num *= other.num;
        self.den *= other.den;
        self.reduce();
    }
}

// (a/b) / (c/d) = (a*d)/(b*c)
impl DivAssign for Rational {
    fn div_assign(&mut self, other: Rational) {
        let mut num = self.num * other.den as i64;
        let mut den = self.den as i64 * other.num;

        if den == 0 {
            panic!("division by zero");
        }
        // b*c picks up the divisor's sign, move it back to the numerator
        if den < 0 {
            num = -num;
            den = -den;
        }

        self.num = num;
        self.den = den as u64;
        self.reduce();
    }
}

// a/b < c/d <=> a*d < c*b, denominators stay positive so the direction is preserved
impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        (self.num * other.den as i64).cmp(&(other.num * self.den as i64))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// cross multiplication happens in the signed domain
fn widen(den: u64) -> Result<i64, RationalError> {
    i64::try_from(den).map_err(|_| RationalError::Overflow)
}

fn normalized(num: i64, den: u64) -> Rational {
    let mut value = Rational { num, den };
    value.reduce();
    value
}

// same formulas as the operators above, with every step checked
impl Rational {
    pub fn try_add(&self, other: &Rational) -> Result<Rational, RationalError> {
        let ad = self
            .num
            .checked_mul(widen(other.den)?)
            .ok_or(RationalError::Overflow)?;
        let cb = other
            .num
            .checked_mul(widen(self.den)?)
            .ok_or(RationalError::Overflow)?;
        let num = ad.checked_add(cb).ok_or(RationalError::Overflow)?;
        let den = self
            .den
            .checked_mul(other.den)
            .ok_or(RationalError::Overflow)?;
        Ok(normalized(num, den))
    }

    pub fn try_sub(&self, other: &Rational) -> Result<Rational, RationalError> {
        let ad = self
            .num
            .checked_mul(widen(other.den)?)
            .ok_or(RationalError::Overflow)?;
        let cb = other
            .num
            .checked_mul(widen(self.den)?)
            .ok_or(RationalError::Overflow)?;
        let num = ad.checked_sub(cb).ok_or(RationalError::Overflow)?;
        let den = self
            .den
            .checked_mul(other.den)
            .ok_or(RationalError::Overflow)?;
        Ok(normalized(num, den))
    }

    pub fn try_mul(&self, other: &Rational) -> Result<Rational, RationalError> {
        let num = self
            .num
            .checked_mul(other.num)
            .ok_or(RationalError::Overflow)?;
        let den = self
            .den
            .checked_mul(other.den)
            .ok_or(RationalError::Overflow)?;
        Ok(normalized(num, den))
    }

    pub fn try_div(&self, other: &Rational) -> Result<Rational, RationalError> {
        if other.num == 0 {
            return Err(RationalError::DivisionByZero);
        }

        let mut num = self
            .num
            .checked_mul(widen(other.den)?)
            .ok_or(RationalError::Overflow)?;
        let mut den = widen(self.den)?
            .checked_mul(other.num)
            .ok_or(RationalError::Overflow)?;

        if den < 0 {
            num = num.checked_neg().ok_or(RationalError::Overflow)?;
            den = den.checked_neg().ok_or(RationalError::Overflow)?;
        }
        Ok(normalized(num, den as u64))
    }
}

impl Zero for Rational {
    fn zero() -> Rational {
        Rational { num: 0, den: 1 }
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Rational {
    fn one() -> Rational {
        Rational { num: 1, den: 1 }
    }

    fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }
}

impl CheckedAdd for Rational {
    fn checked_add(&self, v: &Rational) -> Option<Rational> {
        self.try_add(v).ok()
    }
}

impl CheckedSub for Rational {
    fn checked_sub(&self, v: &Rational) -> Option<Rational> {
        self.try_sub(v).ok()
    }
}

impl CheckedMul for Rational {
    fn checked_mul(&self, v: &Rational) -> Option<Rational> {
        self.try_mul(v).ok()
    }
}

impl CheckedDiv for Rational {
    fn checked_div(&self, v: &Rational) -> Option<Rational> {
        self.try_div(v).ok()
    }
}

#[test]
fn arithmetic_results_are_reduced() {
    let a = Rational::new(1, 3);
    let b = Rational::new(1, 6);

    assert_eq!(a + b, Rational::new(1, 2));
    assert_eq!(a - b, Rational::new(1, 6));
    assert_eq!(a * b, Rational::new(1, 18));
    assert_eq!(a / b, Rational::new(2, 1));
}

#[test]
fn compound_assignment_chain() {
    let mut x = Rational::new(1, 4);

    x += Rational::new(1, 4);
    assert_eq!(x, Rational::new(1, 2));

    x -= Rational::new(1, 8);
    assert_eq!(x, Rational::new(3, 8));

    x *= Rational::new(2, 1);
    assert_eq!(x, Rational::new(3, 4));

    x /= Rational::new(3, 2);
    assert_eq!(x, Rational::new(1, 2));
}

#[test]
fn negation_flips_the_numerator() {
    let a = Rational::new(1, 3);
    assert_eq!((-a).numerator(), -1);
    assert_eq!((-a).denominator(), 3);
    assert_eq!(-(-a), a);
    assert_eq!(-Rational::zero(), Rational::zero());
}

#[test]
fn identities_hold_over_a_grid() {
    let values = [
        Rational::new(0, 1),
        Rational::new(1, 2),
        Rational::new(-3, 4),
        Rational::new(7, 3),
        Rational::new(-5, 6),
        Rational::new(4, 1),
        Rational::new(-9, 12),
    ];

    for a in values {
        assert_eq!(a + Rational::zero(), a);
        assert_eq!(a * Rational::one(), a);
        assert_eq!(a - a, Rational::zero());
        for b in values {
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            if !b.is_zero() {
                assert_eq!((a / b) * b, a);
            }
        }
    }
}

#[test]
fn ordering_is_total() {
    let values = [
        Rational::new(0, 1),
        Rational::new(1, 2),
        Rational::new(2, 4),
        Rational::new(-3, 4),
        Rational::new(7, 3),
        Rational::new(-5, 6),
    ];

    for a in values {
        for b in values {
            let flags = [a < b, a == b, a > b];
            assert_eq!(flags.iter().filter(|set| **set).count(), 1);
        }
    }

    assert!(Rational::new(1, 2) < Rational::new(3, 4));
    assert!(Rational::new(1, 2) == Rational::new(2, 4));
    assert!(Rational::new(-1, 2) < Rational::new(1, 3));
    assert!(Rational::new(3, 4) > Rational::new(1, 2));
    assert!(Rational::new(1, 2) <= Rational::new(2, 4));
    assert!(Rational::new(1, 2) >= Rational::new(2, 4));
}

#[test]
fn mixed_expression() {
    let result = (Rational::new(1, 2) + Rational::new(1, 3))
        * (Rational::new(3, 4) - Rational::new(1, 6))
        / Rational::new(2, 3);
    assert_eq!(result, Rational::new(35, 48));
}

#[test]
fn division_sign_lands_on_the_numerator() {
    let q = Rational::new(1, 3) / Rational::new(-1, 6);
    assert_eq!(q.numerator(), -2);
    assert_eq!(q.denominator(), 1);

    assert_eq!(Rational::new(-1, 3) / Rational::new(-1, 6), Rational::new(2, 1));
}

#[test]
#[should_panic(expected = "division by zero")]
fn dividing_by_zero_panics() {
    let _ = Rational::new(1, 2) / Rational::zero();
}

#[test]
fn zero_and_one_are_canonical() {
    assert!(Rational::zero().is_zero());
    assert!(Rational::one().is_one());
    assert_eq!(Rational::zero(), Rational::new(0, 7));
    assert_eq!(Rational::one(), Rational::new(3, 3));
}

#[test]
fn checked_ops_catch_overflow_and_zero_divisors() {
    let big = Rational::new(i64::MAX, 1);
    let two = Rational::new(2, 1);

    assert_eq!(big.try_add(&big), Err(RationalError::Overflow));
    assert_eq!(
        Rational::new(i64::MIN + 1, 1).try_sub(&two),
        Err(RationalError::Overflow)
    );
    assert_eq!(big.try_mul(&two), Err(RationalError::Overflow));
    assert_eq!(big.checked_mul(&two), None);

    assert_eq!(
        Rational::new(1, 2).try_div(&Rational::zero()),
        Err(RationalError::DivisionByZero)
    );
    assert_eq!(Rational::new(1, 2).checked_div(&Rational::zero()), None);

    assert_eq!(
        Rational::new(1, 2).try_add(&Rational::new(1, 3)),
        Ok(Rational::new(5, 6))
    );
    assert_eq!(
        Rational::new(1, 3).try_div(&Rational::new(-1, 6)),
        Ok(Rational::new(-2, 1))
    );
    assert_eq!(
        Rational::new(1, 2).checked_add(&Rational::new(1, 3)),
        Some(Rational::new(5, 6))
    );
}
