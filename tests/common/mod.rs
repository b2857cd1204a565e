// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use spesa::application::ExpenseService;
use spesa::cli::Session;
use spesa::domain::format_amount;

/// Outcome of a scripted session: the final ledger and everything printed.
pub struct ScriptRun {
    pub service: ExpenseService,
    pub output: String,
}

/// Drive a fresh session with `lines` as console input (one answer per line).
pub fn run_script(lines: &[&str]) -> Result<ScriptRun> {
    run_script_with(ExpenseService::new(), lines)
}

/// Drive a session over an existing service.
pub fn run_script_with(service: ExpenseService, lines: &[&str]) -> Result<ScriptRun> {
    let mut input = lines.join("\n");
    input.push('\n');
    run_bytes_with(service, input.into_bytes())
}

/// Drive a fresh session with raw console bytes, which need not be valid UTF-8.
pub fn run_bytes(input: &[u8]) -> Result<ScriptRun> {
    run_bytes_with(ExpenseService::new(), input.to_vec())
}

fn run_bytes_with(service: ExpenseService, input: Vec<u8>) -> Result<ScriptRun> {
    let mut session = Session::with_service(Cursor::new(input), Vec::new(), service);
    session.run()?;

    let (service, output) = session.into_parts();
    Ok(ScriptRun {
        service,
        output: String::from_utf8(output)?,
    })
}

/// Script lines for menu choice 1 followed by the acknowledgement keypress.
pub fn add(category: &'static str, amount: &'static str, date: &'static str) -> Vec<&'static str> {
    vec!["1", category, amount, date, ""]
}

/// Test fixture: a service preloaded with expenses
pub struct StandardExpenses;

impl StandardExpenses {
    /// Food on two consecutive days plus one transport expense
    pub fn create_basic() -> Result<ExpenseService> {
        let mut service = ExpenseService::new();
        service.record_expense("Food", "10.00", "2024-01-01")?;
        service.record_expense("Food", "5.50", "2024-01-02")?;
        service.record_expense("Transport", "2.25", "2024-01-01")?;
        Ok(service)
    }
}

/// Snapshot of the ledger as (category, two-decimal amount, date) tuples.
pub fn snapshot(service: &ExpenseService) -> Vec<(String, String, String)> {
    service
        .list_expenses()
        .iter()
        .map(|e| {
            (
                e.category.to_string(),
                format_amount(e.amount),
                e.date.to_string(),
            )
        })
        .collect()
}
