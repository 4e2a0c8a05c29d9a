//! Repository implementations over the SQLite pool.

mod expense;
mod user;

pub use expense::{ExpenseRepository, SqlxExpenseRepository};
pub use user::{SqlxUserRepository, UserRepository};
