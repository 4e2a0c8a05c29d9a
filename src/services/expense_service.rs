//! Ownership-scoped CRUD over expense records.
//!
//! Every operation takes the owner's verified [`UserId`] as an explicit
//! argument. That value comes from the auth middleware; nothing here reads
//! identity out of a payload, so acting on another user's records is not
//! expressible through this interface.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::domain::expense::DEFAULT_CATEGORY;
use crate::domain::{Expense, ExpenseId, NewExpense, UpdateExpense, UserId};
use crate::errors::{Error, Result};
use crate::storage::repositories::{ExpenseRepository, SqlxExpenseRepository};

/// Fields accepted when creating an expense. Any owner information a client
/// sends is dropped before this type is built.
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub category: Option<String>,
}

/// Fields accepted when updating an expense. There is no owner field.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub category: Option<String>,
}

#[derive(Clone)]
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepository>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepository>) -> Self {
        Self { repository }
    }

    pub fn with_sqlx(pool: crate::storage::DbPool) -> Self {
        Self::new(Arc::new(SqlxExpenseRepository::new(pool)))
    }

    /// List all expenses owned by `owner`.
    #[instrument(skip(self))]
    pub async fn list(&self, owner: &UserId) -> Result<Vec<Expense>> {
        self.repository.list_for_owner(owner).await
    }

    /// Create an expense owned by `owner`.
    #[instrument(skip(self, input))]
    pub async fn create(&self, owner: &UserId, input: CreateExpenseInput) -> Result<Expense> {
        let description = validate_description(&input.description)?;
        let amount = validate_amount(input.amount)?;
        let date = parse_date(&input.date)?;
        let category = match input.category {
            Some(category) if !category.trim().is_empty() => category.trim().to_string(),
            _ => DEFAULT_CATEGORY.to_string(),
        };

        let created = self
            .repository
            .create(NewExpense { description, amount, date, category, owner_id: owner.clone() })
            .await?;

        info!(expense_id = %created.id, "expense created");
        Ok(created)
    }

    /// Update the expense matching `(id, owner)`.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        owner: &UserId,
        id: &ExpenseId,
        input: UpdateExpenseInput,
    ) -> Result<Expense> {
        let update = UpdateExpense {
            description: input.description.as_deref().map(validate_description).transpose()?,
            amount: input.amount.map(validate_amount).transpose()?,
            date: input.date.as_deref().map(parse_date).transpose()?,
            category: input
                .category
                .map(|category| {
                    let category = category.trim();
                    if category.is_empty() {
                        DEFAULT_CATEGORY.to_string()
                    } else {
                        category.to_string()
                    }
                }),
        };

        self.repository.update(id, owner, update).await
    }

    /// Delete the expense matching `(id, owner)`.
    #[instrument(skip(self))]
    pub async fn delete(&self, owner: &UserId, id: &ExpenseId) -> Result<()> {
        self.repository.delete(id, owner).await?;
        info!(expense_id = %id, "expense deleted");
        Ok(())
    }
}

fn validate_description(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::validation_field("Description must not be empty.", "description"));
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::validation_field("Amount must be a positive number.", "amount"));
    }
    Ok(amount)
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    raw.trim()
        .parse::<NaiveDate>()
        .map_err(|_| Error::validation_field("Date must be a valid YYYY-MM-DD date.", "date"))
}
