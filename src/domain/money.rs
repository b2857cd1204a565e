use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Money is kept as an exact decimal so nothing is lost between entry and display.
/// Rounding to cents only happens in [`format_amount`].
pub type Amount = Decimal;

/// Format an amount with exactly two decimals, rounding half away from zero.
/// Example: 12.5 -> "12.50", 12.999 -> "13.00", -1.234 -> "-1.23"
pub fn format_amount(amount: Amount) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Parse a decimal string into an amount.
/// Accepts plain (`"12.50"`, `"+3"`) and scientific (`"1e2"`, `"1.5E-3"`) notation.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    let parsed = if input.contains(['e', 'E']) {
        Decimal::from_scientific(input)
    } else {
        Decimal::from_str(input)
    };
    parsed.map_err(|err| match err {
        rust_decimal::Error::ExceedsMaximumPossibleValue
        | rust_decimal::Error::LessThanMinimumPossibleValue => ParseAmountError::TooLarge,
        _ => ParseAmountError::InvalidFormat,
    })
}

/// Sum of amounts. Saturates at [`Decimal::MAX`] instead of overflowing.
pub fn sum_amounts(amounts: impl IntoIterator<Item = Amount>) -> Amount {
    amounts.into_iter().fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).unwrap_or(Decimal::MAX)
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    TooLarge,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid money format"),
            ParseAmountError::TooLarge => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        parse_amount(s).unwrap()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(amount("50")), "50.00");
        assert_eq!(format_amount(amount("12.5")), "12.50");
        assert_eq!(format_amount(amount("0.01")), "0.01");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
        assert_eq!(format_amount(amount("-1.234")), "-1.23");
    }

    #[test]
    fn test_format_amount_rounds() {
        assert_eq!(format_amount(amount("12.999")), "13.00");
        assert_eq!(format_amount(amount("0.005")), "0.01");
        assert_eq!(format_amount(amount("0.004")), "0.00");
        assert_eq!(format_amount(amount("2.675")), "2.68");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(amount("12.50"), Decimal::new(1250, 2));
        assert_eq!(amount("+3"), Decimal::new(3, 0));
        assert_eq!(amount("  4.20 "), Decimal::new(420, 2));
        assert_eq!(amount("-5"), Decimal::new(-5, 0));
        assert_eq!(amount("0.001"), Decimal::new(1, 3));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(amount("1e2"), Decimal::new(100, 0));
        assert_eq!(amount("1.5E-3"), Decimal::new(15, 4));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount("abc"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount(""), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("12.34.56"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("--5"), Err(ParseAmountError::InvalidFormat));
    }

    #[test]
    fn test_sum_amounts() {
        let total = sum_amounts([amount("0.005"), amount("0.005")]);
        assert_eq!(format_amount(total), "0.01");
        assert_eq!(sum_amounts([Decimal::MAX, Decimal::ONE]), Decimal::MAX);
        assert_eq!(sum_amounts(std::iter::empty()), Decimal::ZERO);
    }
}
