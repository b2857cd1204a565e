use std::fmt;

use super::Amount;

/// A single expense entry.
/// Expenses are immutable once recorded - the ledger only appends or removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Category as entered by the user (trimmed, case preserved)
    pub category: Category,
    /// Exact amount as entered (always positive)
    pub amount: Amount,
    /// Date exactly as entered by the user
    pub date: ExpenseDate,
}

impl Expense {
    pub fn new(category: Category, amount: Amount, date: ExpenseDate) -> Self {
        assert!(amount > Amount::ZERO, "Expense amount must be positive");
        Self {
            category,
            amount,
            date,
        }
    }
}

/// A non-empty expense category.
/// Display keeps the original casing; comparisons go through [`Category::matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    /// Returns `None` when the input is blank.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against an already-normalised query.
    pub fn matches(&self, query: &str) -> bool {
        self.0.to_lowercase() == query
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalise user input into the form used for category comparisons.
pub fn normalize_category(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A date in `YYYY-MM-DD` textual form.
///
/// Only the shape and the month/day ranges are checked, so `2024-02-31`
/// is a valid `ExpenseDate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDate(String);

impl ExpenseDate {
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let text = input.trim();
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 10 || chars[4] != '-' || chars[7] != '-' {
            return Err(DateError::InvalidFormat);
        }

        let parts: Vec<&str> = text.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidValues);
        };

        // Components may carry surrounding spaces, e.g. "2024- 3-15"
        let component = |s: &str| {
            s.trim()
                .parse::<i32>()
                .map_err(|_| DateError::InvalidValues)
        };
        component(*year)?;
        let month = component(*month)?;
        let day = component(*day)?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(DateError::InvalidValues);
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// Wrong length or hyphens in the wrong place
    InvalidFormat,
    /// Components are not integers, or month/day out of range
    InvalidValues,
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidFormat => write!(f, "date must look like YYYY-MM-DD"),
            DateError::InvalidValues => write!(f, "date has an out-of-range month or day"),
        }
    }
}

impl std::error::Error for DateError {}
