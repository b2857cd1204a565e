use std::str::FromStr;

use crate::application::InputError;

pub const MENU_TITLE: &str = "Expense Tracker Menu";
pub const MENU_PROMPT: &str = "Enter your choice (1-6): ";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    FilterByCategory,
    CalculateTotal,
    DeleteExpenses,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewExpenses,
        MenuChoice::FilterByCategory,
        MenuChoice::CalculateTotal,
        MenuChoice::DeleteExpenses,
        MenuChoice::Exit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "1",
            MenuChoice::ViewExpenses => "2",
            MenuChoice::FilterByCategory => "3",
            MenuChoice::CalculateTotal => "4",
            MenuChoice::DeleteExpenses => "5",
            MenuChoice::Exit => "6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "Add New Expense",
            MenuChoice::ViewExpenses => "View All Expenses",
            MenuChoice::FilterByCategory => "Filter Expenses by Category",
            MenuChoice::CalculateTotal => "Calculate Total Expenses",
            MenuChoice::DeleteExpenses => "Delete Expenses",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == s)
            .ok_or_else(|| InputError::InvalidChoice(s.to_string()))
    }
}

/// Render the menu body (without the trailing prompt).
pub fn render_menu() -> String {
    let mut menu = format!("\n{}\n{}\n", MENU_TITLE, "=".repeat(25));
    for choice in MenuChoice::ALL {
        menu.push_str(&format!("{}. {}\n", choice.key(), choice.label()));
    }
    menu
}
