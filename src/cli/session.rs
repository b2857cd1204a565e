use std::io::{BufRead, Write};

use crate::application::{ExpenseService, SessionError};
use crate::domain::{Expense, format_amount};

use super::menu::{MENU_PROMPT, MenuChoice, render_menu};
use super::prompt::Prompter;

const SEPARATOR_WIDTH: usize = 40;

/// Whether the menu loop should keep going after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive session: the menu loop plus the screen for each operation.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    service: ExpenseService,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_service(input, output, ExpenseService::new())
    }

    pub fn with_service(input: R, output: W, service: ExpenseService) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            service,
        }
    }

    /// Split the session into its ledger service and output sink.
    pub fn into_parts(self) -> (ExpenseService, W) {
        (self.service, self.prompter.into_output())
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), SessionError> {
        log::info!("Session started");
        let result = self.menu_loop();
        log::info!(
            "Session finished with {} expense(s) recorded",
            self.service.ledger().len()
        );

        match result {
            Err(SessionError::InputClosed) => {
                log::debug!("Input closed, leaving the menu");
                self.say_goodbye()
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<(), SessionError> {
        loop {
            self.prompter.print(&render_menu())?;
            let answer = self.prompter.ask(MENU_PROMPT)?;

            if self.dispatch(&answer)? == Flow::Exit {
                return Ok(());
            }
            self.prompter.pause()?;
        }
    }

    fn dispatch(&mut self, answer: &str) -> Result<Flow, SessionError> {
        let choice = match answer.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => {
                log::debug!("Unrecognised menu choice: {:?}", err);
                self.prompter.say(format!("\n{}", err))?;
                return Ok(Flow::Continue);
            }
        };

        match choice {
            MenuChoice::AddExpense => self.add_expense()?,
            MenuChoice::ViewExpenses => self.view_expenses()?,
            MenuChoice::FilterByCategory => self.filter_by_category()?,
            MenuChoice::CalculateTotal => self.calculate_total()?,
            MenuChoice::DeleteExpenses => self.delete_expenses()?,
            MenuChoice::Exit => {
                self.say_goodbye()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn say_goodbye(&mut self) -> Result<(), SessionError> {
        self.prompter.say("\nExiting program. Goodbye!")
    }

    fn add_expense(&mut self) -> Result<(), SessionError> {
        let category = self
            .prompter
            .ask_until("Enter category: ", ExpenseService::parse_category)?;
        let amount = self
            .prompter
            .ask_until("Enter amount: ", ExpenseService::parse_amount)?;
        let date = self
            .prompter
            .ask_until("Enter date (YYYY-MM-DD): ", ExpenseService::parse_date)?;

        self.service.add_expense(category, amount, date);
        self.prompter.say("Expense added successfully!")
    }

    fn view_expenses(&mut self) -> Result<(), SessionError> {
        let expenses = self.service.list_expenses();
        if expenses.is_empty() {
            return self.prompter.say("\nNo expenses to display.");
        }

        let mut lines = vec!["\nAll Expenses:".to_string(), separator()];
        for (idx, expense) in expenses.iter().enumerate() {
            lines.push(format!("{}. Category: {}", idx + 1, expense.category));
            lines.extend(amount_and_date(expense));
            lines.push(separator());
        }
        self.prompter.say_lines(&lines)
    }

    fn filter_by_category(&mut self) -> Result<(), SessionError> {
        if self.service.ledger().is_empty() {
            return self.prompter.say("\nNo expenses to filter.");
        }

        let query = self.prompter.ask("\nEnter category to filter: ")?;
        let filter = self.service.filter_by_category(&query);
        if filter.expenses.is_empty() {
            let message = format!(
                "\nNo expenses found for category '{}'.",
                filter.category
            );
            return self.prompter.say(message);
        }

        let mut lines = vec![format!("\nExpenses in '{}':", filter.category), separator()];
        for (idx, expense) in filter.expenses.iter().enumerate() {
            let [amount, date] = amount_and_date(expense);
            lines.push(format!("{}. {}", idx + 1, amount.trim_start()));
            lines.push(date);
            lines.push(separator());
        }
        self.prompter.say_lines(&lines)
    }

    fn calculate_total(&mut self) -> Result<(), SessionError> {
        match self.service.total() {
            None => self.prompter.say("\nNo expenses to calculate."),
            Some(total) => self
                .prompter
                .say(format!("\nTotal Expenses: ${}", format_amount(total))),
        }
    }

    fn delete_expenses(&mut self) -> Result<(), SessionError> {
        if self.service.ledger().is_empty() {
            return self.prompter.say("\nNo expenses to delete.");
        }

        let category = self
            .prompter
            .ask("\nEnter category of expenses to delete: ")?;
        let date = self
            .prompter
            .ask("Enter date (YYYY-MM-DD) of expenses to delete: ")?;

        let result = self.service.delete_expenses(&category, &date);
        self.prompter
            .say(format!("\nDeleted {} expense(s).", result.removed))
    }
}

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn amount_and_date(expense: &Expense) -> [String; 2] {
    [
        format!("   Amount: ${}", format_amount(expense.amount)),
        format!("   Date: {}", expense.date),
    ]
}
