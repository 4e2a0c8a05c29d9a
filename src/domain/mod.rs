//! Domain layer
//!
//! Pure domain types with no HTTP or service dependencies. The NewType ID
//! wrappers prevent mixing a user id with an expense id at compile time.

pub mod expense;
pub mod id;

pub use expense::{Expense, NewExpense, UpdateExpense};
pub use id::{ExpenseId, UserId};
