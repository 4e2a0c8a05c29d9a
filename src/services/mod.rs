//! Application services orchestrating validation, repositories, and domain
//! rules.

pub mod expense_service;

pub use expense_service::{CreateExpenseInput, ExpenseService, UpdateExpenseInput};
