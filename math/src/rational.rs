use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{RationalError, Result};

/// Arbitrary-precision rational number in canonical form.
///
/// The denominator is strictly positive and coprime with the numerator;
/// zero is stored as `0/1`. Canonicalization happens on construction and
/// after every arithmetic operation, so structural equality is exact
/// equality and [`Rational::is_integer`] is a plain denominator check.
///
/// Values are immutable: every operation produces a fresh canonical
/// rational.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

/// Simplifies constructing [`Rational`]s.
///
/// One argument builds an integer, two arguments a ratio. The
/// two-argument form panics on a zero denominator, so it is meant for
/// literals in tests and docs.
///
/// ```
/// use math::prelude::*;
///
/// assert_eq!(rat!(6, 4), rat!(3, 2));
/// assert_eq!(rat!(5), Rational::from(5));
/// ```
#[macro_export]
macro_rules! rat {
    ($n:expr) => {
        $crate::rational::Rational::from($n)
    };
    ($n:expr, $d:expr) => {
        $crate::rational::Rational::new(($n).into(), ($d).into())
            .expect("nonzero denominator")
    };
}

impl Rational {
    /// Build `num / den` in canonical form.
    ///
    /// Fails with [`RationalError::DivisionByZero`] when `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalized(num, den))
    }

    /// Represent the integer `n` as `n / 1`.
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            num: n,
            den: BigInt::one(),
        }
    }

    /// Reduce to lowest terms and force the denominator positive.
    fn normalized(mut num: BigInt, mut den: BigInt) -> Self {
        debug_assert!(!den.is_zero());
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        if num.is_zero() {
            return Self::from_integer(num);
        }
        let g = num.gcd(&den);
        Self {
            num: num / &g,
            den: den / g,
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    /// True iff the canonical denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// The numerator when this value is an integer, `None` otherwise.
    pub fn into_integer(self) -> Option<BigInt> {
        self.is_integer().then_some(self.num)
    }

    /// Exact division.
    ///
    /// Fails with [`RationalError::DivisionByZero`] when `divisor` is
    /// zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.num.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalized(
            &self.num * &divisor.den,
            &self.den * &divisor.num,
        ))
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

impl From<u32> for Rational {
    fn from(n: u32) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational::normalized(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational::normalized(
            &self.num * &rhs.den - &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        &self - &rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::normalized(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -self.clone()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
