use thiserror::Error;

use crate::domain::{DateError, ParseAmountError};

/// Malformed user input. The messages are shown verbatim before re-prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Category cannot be empty. Please try again.")]
    EmptyCategory,

    #[error("Invalid amount. Please enter a numeric value.")]
    InvalidAmount,

    #[error("Amount must be a positive number.")]
    NonPositiveAmount,

    #[error("Amount is too large.")]
    AmountTooLarge,

    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDateFormat,

    #[error("Invalid date values. Please check the date.")]
    InvalidDateValues,

    #[error("Invalid choice. Please enter a number between 1-6.")]
    InvalidChoice(String),
}

impl From<ParseAmountError> for InputError {
    fn from(err: ParseAmountError) -> Self {
        match err {
            ParseAmountError::InvalidFormat => InputError::InvalidAmount,
            ParseAmountError::TooLarge => InputError::AmountTooLarge,
        }
    }
}

impl From<DateError> for InputError {
    fn from(err: DateError) -> Self {
        match err {
            DateError::InvalidFormat => InputError::InvalidDateFormat,
            DateError::InvalidValues => InputError::InvalidDateValues,
        }
    }
}

/// Failures that stop an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Input stream closed")]
    InputClosed,

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
