//! Quantity blocks
//!
//! The body of an ingredient's braces has the shape `<amount>%<unit>`, both
//! parts optional. The amount literal is recognised with a small chumsky
//! grammar whose alternatives mirror the three amount types:
//!
//! ```text
//! literal  := ("+" | "-")? (fraction | decimal | integer)
//! fraction := digits "/" digits
//! decimal  := digits? "." digits?      (at least one side present)
//! integer  := digits
//! ```
//!
//! A missing amount is the integer `1`, a missing unit is `units`.

use chumsky::prelude::*;
use log::debug;

use crate::cooklang::ast::{Amount, Fraction, Quantity, DEFAULT_UNIT};
use crate::cooklang::error::QuantityError;

/// Separates the amount from the unit inside a quantity block.
pub const UNIT_SEPARATOR: char = '%';

/// Type alias for parser error
type ParserError = Simple<char>;

/// Amount literal as written, before numeric conversion.
#[derive(Debug, Clone, PartialEq)]
enum Literal {
    Integer(String),
    Decimal(String),
    Fraction(String, String),
}

impl Literal {
    /// Prefix the leading sign; for fractions it goes on the numerator.
    fn signed(self, sign: char) -> Self {
        match self {
            Literal::Integer(digits) => Literal::Integer(format!("{}{}", sign, digits)),
            Literal::Decimal(decimal) => Literal::Decimal(format!("{}{}", sign, decimal)),
            Literal::Fraction(numerator, denominator) => {
                Literal::Fraction(format!("{}{}", sign, numerator), denominator)
            }
        }
    }
}

fn digits() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
}

fn literal() -> impl Parser<char, Literal, Error = ParserError> {
    let fraction = digits()
        .then_ignore(just('/'))
        .then(digits())
        .map(|(numerator, denominator)| Literal::Fraction(numerator, denominator));

    let decimal = digits()
        .or_not()
        .then_ignore(just('.'))
        .then(digits().or_not())
        .try_map(|(whole, fractional), span| match (whole, fractional) {
            (None, None) => Err(Simple::custom(span, "decimal point without digits")),
            (whole, fractional) => Ok(Literal::Decimal(format!(
                "{}.{}",
                whole.unwrap_or_else(|| "0".to_string()),
                fractional.unwrap_or_else(|| "0".to_string())
            ))),
        });

    let integer = digits().map(Literal::Integer);

    one_of("+-")
        .or_not()
        .then(fraction.or(decimal).or(integer))
        .map(|(sign, literal)| match sign {
            Some(sign) => literal.signed(sign),
            None => literal,
        })
        .then_ignore(end())
}

/// Parse an amount literal. Blank input is the default amount `1`.
pub fn parse_amount(text: &str) -> Result<Amount, QuantityError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Amount::default());
    }

    let literal = literal().parse(text).map_err(|errors| {
        debug!("amount {:?} rejected: {:?}", text, errors);
        QuantityError::InvalidAmount(text.to_string())
    })?;

    let out_of_range = || QuantityError::OutOfRange(text.to_string());
    match literal {
        Literal::Integer(digits) => digits
            .parse::<i64>()
            .map(Amount::Integer)
            .map_err(|_| out_of_range()),
        Literal::Decimal(decimal) => match decimal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Amount::Float(value)),
            _ => Err(out_of_range()),
        },
        Literal::Fraction(numerator, denominator) => {
            let numerator = numerator.parse::<i64>().map_err(|_| out_of_range())?;
            let denominator = denominator.parse::<i64>().map_err(|_| out_of_range())?;
            Fraction::new(numerator, denominator)
                .map(Amount::Fraction)
                .ok_or_else(|| QuantityError::ZeroDenominator(text.to_string()))
        }
    }
}

/// Parse the body of a quantity block (the text between the braces).
pub fn parse_quantity(body: &str) -> Result<Quantity, QuantityError> {
    let (amount, unit) = match body.split_once(UNIT_SEPARATOR) {
        Some((amount, unit)) => (amount, unit.trim()),
        None => (body, ""),
    };
    let amount = parse_amount(amount)?;
    let unit = if unit.is_empty() { DEFAULT_UNIT } else { unit };
    Ok(Quantity::new(amount, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(parse_amount("42"), Ok(Amount::Integer(42)));
        assert_eq!(parse_amount("  7 "), Ok(Amount::Integer(7)));
    }

    #[test]
    fn decimals() {
        assert_eq!(parse_amount("0.5"), Ok(Amount::Float(0.5)));
        assert_eq!(parse_amount(".25"), Ok(Amount::Float(0.25)));
        assert_eq!(parse_amount("2."), Ok(Amount::Float(2.0)));
    }

    #[test]
    fn fractions() {
        assert_eq!(
            parse_amount("1/2"),
            Ok(Amount::Fraction(Fraction::new(1, 2).unwrap()))
        );
        assert_eq!(
            parse_amount("2/4"),
            Ok(Amount::Fraction(Fraction::new(1, 2).unwrap()))
        );
    }

    #[test]
    fn signed_literals() {
        assert_eq!(parse_amount("-1"), Ok(Amount::Integer(-1)));
        assert_eq!(parse_amount("+2"), Ok(Amount::Integer(2)));
        assert_eq!(parse_amount("-.5"), Ok(Amount::Float(-0.5)));
        assert_eq!(
            parse_amount("-1/2"),
            Ok(Amount::Fraction(Fraction::new(-1, 2).unwrap()))
        );
        assert!(parse_amount("-").is_err());
        assert!(parse_amount("+-1").is_err());
        assert!(parse_amount("1/-2").is_err());
    }

    #[test]
    fn blank_amount_defaults_to_one() {
        assert_eq!(parse_amount(""), Ok(Amount::Integer(1)));
        assert_eq!(parse_amount("   "), Ok(Amount::Integer(1)));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(
            parse_amount("a few"),
            Err(QuantityError::InvalidAmount("a few".into()))
        );
        assert!(parse_amount(".").is_err());
        assert!(parse_amount("1.5/2").is_err());
        assert!(parse_amount("1 2").is_err());
    }

    #[test]
    fn rejects_zero_denominator() {
        assert_eq!(
            parse_amount("1/0"),
            Err(QuantityError::ZeroDenominator("1/0".into()))
        );
    }

    #[test]
    fn rejects_out_of_range_integers() {
        assert_eq!(
            parse_amount("99999999999999999999"),
            Err(QuantityError::OutOfRange("99999999999999999999".into()))
        );
    }

    #[test]
    fn quantity_blocks() {
        assert_eq!(
            parse_quantity("42%grams"),
            Ok(Quantity::new(Amount::Integer(42), "grams"))
        );
        assert_eq!(
            parse_quantity(" 1/2 % cup "),
            Ok(Quantity::new(
                Amount::Fraction(Fraction::new(1, 2).unwrap()),
                "cup"
            ))
        );
        assert_eq!(parse_quantity("1"), Ok(Quantity::default()));
        assert_eq!(
            parse_quantity("%grams"),
            Ok(Quantity::new(Amount::Integer(1), "grams"))
        );
        assert_eq!(parse_quantity("3%"), Ok(Quantity::new(Amount::Integer(3), "units")));
        assert_eq!(parse_quantity(""), Ok(Quantity::default()));
    }

    #[test]
    fn from_str_delegates() {
        let quantity: Quantity = "0.5%grams".parse().unwrap();
        assert_eq!(quantity, Quantity::new(Amount::Float(0.5), "grams"));
    }
}
