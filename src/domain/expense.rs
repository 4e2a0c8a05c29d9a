//! Expense record entity and its create/update inputs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ExpenseId, UserId};

/// Category applied when a request omits one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A persisted expense record. `owner_id` is set at creation and immutable;
/// every repository operation filters on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an expense. The owner comes from the authenticated
/// request context, never from the payload.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
    pub owner_id: UserId,
}

/// Partial update for an expense. There is deliberately no owner field:
/// ownership can never be reassigned.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpense {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
}
