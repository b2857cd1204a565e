use super::{Amount, Expense, sum_amounts};

/// Insertion-ordered collection of expenses for one session.
/// Records have no identity beyond their position; duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Append an expense at the end of the ledger.
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// All expenses in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses whose category equals `category` ignoring case.
    /// `category` must already be normalised (trimmed, lowercased).
    pub fn filter_by_category(&self, category: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category.matches(category))
            .collect()
    }

    /// Sum of all amounts, at full precision. Saturates instead of overflowing.
    pub fn total(&self) -> Amount {
        sum_amounts(self.expenses.iter().map(|e| e.amount))
    }

    /// Remove every expense matching the normalised category and the exact date text.
    /// Returns how many were removed; the rest keep their relative order.
    pub fn remove_matching(&mut self, category: &str, date: &str) -> usize {
        let before = self.expenses.len();
        self.expenses
            .retain(|e| !(e.category.matches(category) && e.date.as_str() == date));
        before - self.expenses.len()
    }
}
