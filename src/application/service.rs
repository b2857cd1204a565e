use crate::domain::{
    normalize_category, parse_amount as parse_decimal, Amount, Category, Expense, ExpenseDate, Ledger,
};

use super::InputError;

/// Application service providing the expense use cases over an owned ledger.
/// This is the interface the interactive session talks to.
#[derive(Debug, Default)]
pub struct ExpenseService {
    ledger: Ledger,
}

/// Result of filtering by category
pub struct CategoryFilter<'a> {
    /// The normalised (trimmed, lowercased) query
    pub category: String,
    pub expenses: Vec<&'a Expense>,
}

/// Result of a bulk delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub category: String,
    pub date: String,
    pub removed: usize,
}

impl ExpenseService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // ========================
    // Input validation
    // ========================

    /// Validate a category answer.
    pub fn parse_category(input: &str) -> Result<Category, InputError> {
        Category::parse(input).ok_or(InputError::EmptyCategory)
    }

    /// Validate an amount answer. Must be numeric and strictly positive.
    pub fn parse_amount(input: &str) -> Result<Amount, InputError> {
        let amount = parse_decimal(input)?;
        if amount <= Amount::ZERO {
            return Err(InputError::NonPositiveAmount);
        }
        Ok(amount)
    }

    /// Validate a date answer (shape and month/day ranges only).
    pub fn parse_date(input: &str) -> Result<ExpenseDate, InputError> {
        Ok(ExpenseDate::parse(input)?)
    }

    // ========================
    // Expense operations
    // ========================

    /// Append an already-validated expense.
    pub fn add_expense(
        &mut self,
        category: Category,
        amount: Amount,
        date: ExpenseDate,
    ) -> &Expense {
        self.ledger.push(Expense::new(category, amount, date));
        log::debug!("Recorded expense #{} ({})", self.ledger.len(), amount);
        &self.ledger.expenses()[self.ledger.len() - 1]
    }

    /// Validate raw answers and append the expense in one step.
    pub fn record_expense(
        &mut self,
        category: &str,
        amount: &str,
        date: &str,
    ) -> Result<&Expense, InputError> {
        let category = Self::parse_category(category)?;
        let amount = Self::parse_amount(amount)?;
        let date = Self::parse_date(date)?;
        Ok(self.add_expense(category, amount, date))
    }

    /// All expenses in insertion order.
    pub fn list_expenses(&self) -> &[Expense] {
        self.ledger.expenses()
    }

    /// Expenses whose category matches the query ignoring case and surrounding whitespace.
    pub fn filter_by_category(&self, query: &str) -> CategoryFilter<'_> {
        let category = normalize_category(query);
        let expenses = self.ledger.filter_by_category(&category);
        log::debug!(
            "Category '{}' matched {} of {} expenses",
            category,
            expenses.len(),
            self.ledger.len()
        );
        CategoryFilter { category, expenses }
    }

    /// Sum of all expenses, or `None` when nothing has been recorded.
    pub fn total(&self) -> Option<Amount> {
        if self.ledger.is_empty() {
            None
        } else {
            Some(self.ledger.total())
        }
    }

    /// Remove every expense in `category` (ignoring case) dated exactly `date`.
    pub fn delete_expenses(&mut self, category: &str, date: &str) -> DeleteResult {
        let category = normalize_category(category);
        let date = date.trim().to_string();
        let removed = self.ledger.remove_matching(&category, &date);
        log::debug!(
            "Removed {} expense(s) for '{}' on {}; {} remain",
            removed,
            category,
            date,
            self.ledger.len()
        );
        DeleteResult {
            category,
            date,
            removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(
            ExpenseService::parse_amount("12.50"),
            Ok(Amount::new(1250, 2))
        );
        assert_eq!(
            ExpenseService::parse_amount("abc"),
            Err(InputError::InvalidAmount)
        );
        assert_eq!(
            ExpenseService::parse_amount("-5"),
            Err(InputError::NonPositiveAmount)
        );
        assert_eq!(
            ExpenseService::parse_amount("0"),
            Err(InputError::NonPositiveAmount)
        );
        assert_eq!(
            ExpenseService::parse_amount("-0.0"),
            Err(InputError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_parse_amount_keeps_sub_cent_values() {
        assert_eq!(
            ExpenseService::parse_amount("0.001"),
            Ok(Amount::new(1, 3))
        );
        assert_eq!(
            ExpenseService::parse_amount("1e2"),
            Ok(Amount::new(100, 0))
        );
    }

    #[test]
    fn test_parse_date_errors_are_distinct() {
        assert_eq!(
            ExpenseService::parse_date("2024/01/01"),
            Err(InputError::InvalidDateFormat)
        );
        assert_eq!(
            ExpenseService::parse_date("2024-13-01"),
            Err(InputError::InvalidDateValues)
        );
    }

    #[test]
    fn test_record_expense() {
        let mut service = ExpenseService::new();
        let expense = service
            .record_expense("Food", "12.50", "2024-03-15")
            .unwrap();
        assert_eq!(expense.category.as_str(), "Food");
        assert_eq!(expense.amount, Amount::new(1250, 2));
        assert_eq!(expense.date.as_str(), "2024-03-15");
        assert_eq!(service.list_expenses().len(), 1);
    }

    #[test]
    fn test_record_expense_rejects_and_leaves_ledger_untouched() {
        let mut service = ExpenseService::new();
        assert_eq!(
            service.record_expense("  ", "1", "2024-01-01").unwrap_err(),
            InputError::EmptyCategory
        );
        assert!(service.record_expense("Food", "1", "2024-00-10").is_err());
        assert!(service.ledger().is_empty());
    }

    #[test]
    fn test_total_empty() {
        let service = ExpenseService::new();
        assert_eq!(service.total(), None);
    }

    #[test]
    fn test_delete_normalises_category_not_date() {
        let mut service = ExpenseService::new();
        service.record_expense("Food", "1", "2024-01-01").unwrap();

        let result = service.delete_expenses("  FOOD ", " 2024-01-01 ");
        assert_eq!(result.category, "food");
        assert_eq!(result.date, "2024-01-01");
        assert_eq!(result.removed, 1);
    }
}
