//! Quantities attached to ingredients
//!
//! The numeric part of a quantity keeps the surface form it was written in:
//! `2` stays an integer, `0.5` a float and `1/2` an exact [`Fraction`].
//! Consumers that need exact arithmetic can rely on fractions never being
//! rounded through a float.

use serde::Serialize;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::cooklang::error::QuantityError;

/// Unit used when a quantity block does not name one.
pub const DEFAULT_UNIT: &str = "units";

/// Exact rational number, always stored in lowest terms with a positive
/// denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Builds a normalized fraction. Returns `None` for a zero denominator.
    pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
        Self::reduce(numerator as i128, denominator as i128)
    }

    pub fn from_integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Exact sum, `None` when the result does not fit in `i64` terms.
    pub fn checked_add(self, other: Fraction) -> Option<Fraction> {
        let (a, b) = (self.numerator as i128, self.denominator as i128);
        let (c, d) = (other.numerator as i128, other.denominator as i128);
        let numerator = a.checked_mul(d)?.checked_add(c.checked_mul(b)?)?;
        let denominator = b.checked_mul(d)?;
        Self::reduce(numerator, denominator)
    }

    fn reduce(numerator: i128, denominator: i128) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let divisor = gcd(numerator.abs(), denominator.abs());
        let (mut numerator, mut denominator) = (numerator / divisor, denominator / divisor);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        Some(Self {
            numerator: i64::try_from(numerator).ok()?,
            denominator: i64::try_from(denominator).ok()?,
        })
    }
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<Fraction> for String {
    fn from(fraction: Fraction) -> Self {
        fraction.to_string()
    }
}

/// Numeric amount, classified by how the literal was written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    /// `42`
    Integer(i64),
    /// `0.5`
    Float(f64),
    /// `1/2`
    Fraction(Fraction),
}

impl Amount {
    pub fn as_f64(&self) -> f64 {
        match self {
            Amount::Integer(value) => *value as f64,
            Amount::Float(value) => *value,
            Amount::Fraction(fraction) => fraction.to_f64(),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Amount::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Amount::Float(_))
    }

    pub fn is_fraction(&self) -> bool {
        matches!(self, Amount::Fraction(_))
    }

    /// Digits after the decimal point in the shortest literal for this
    /// amount. `None` for fractions, which have no finite decimal form in
    /// general.
    fn decimal_scale(&self) -> Option<usize> {
        match self {
            Amount::Integer(_) => Some(0),
            Amount::Float(value) => Some(
                value
                    .to_string()
                    .split_once('.')
                    .map_or(0, |(_, digits)| digits.len()),
            ),
            Amount::Fraction(_) => None,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Integer(1)
    }
}

/// Sums two amounts, keeping the most exact representation both sides allow.
///
/// Integers stay integers, integers and fractions combine into a fraction,
/// and anything involving a float becomes a float. Exact sums that overflow
/// fall back to a float.
///
/// Float sums of decimal literals are rounded to the longer of the two
/// literals' decimal places, so `0.1 + 0.2` is `0.3`.
impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        let exact = match (self, other) {
            (Amount::Integer(a), Amount::Integer(b)) => a.checked_add(b).map(Amount::Integer),
            (Amount::Fraction(a), Amount::Fraction(b)) => a.checked_add(b).map(Amount::Fraction),
            (Amount::Fraction(f), Amount::Integer(i)) | (Amount::Integer(i), Amount::Fraction(f)) => {
                f.checked_add(Fraction::from_integer(i)).map(Amount::Fraction)
            }
            _ => None,
        };
        exact.unwrap_or_else(|| {
            let sum = self.as_f64() + other.as_f64();
            let scale = self.decimal_scale().zip(other.decimal_scale());
            match scale {
                Some((a, b)) => Amount::Float(round_to_scale(sum, a.max(b))),
                None => Amount::Float(sum),
            }
        })
    }
}

/// Round through the decimal text of `value` so the result is the float
/// nearest to the rounded decimal.
fn round_to_scale(value: f64, scale: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", scale, value).parse().unwrap_or(value)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Integer(value) => write!(f, "{}", value),
            Amount::Float(value) => write!(f, "{}", value),
            Amount::Fraction(fraction) => write!(f, "{}", fraction),
        }
    }
}

/// An amount paired with its unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    pub amount: Amount,
    pub unit: String,
}

impl Quantity {
    pub fn new(amount: Amount, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }

    /// Returns `true` when amount and unit are both the defaults.
    pub fn is_default(&self) -> bool {
        self.amount == Amount::default() && self.unit == DEFAULT_UNIT
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::new(Amount::default(), DEFAULT_UNIT)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

/// Parses the body of a quantity block, e.g. `42%grams` or `1/2 % cup`.
impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(body: &str) -> Result<Self, Self::Err> {
        crate::cooklang::parsing::quantity::parse_quantity(body)
    }
}
