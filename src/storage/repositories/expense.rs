//! Expense repository with ownership-scoped access.
//!
//! Every read and mutation filters on `(id, owner_id)` inside a single
//! statement, so a record that exists but belongs to someone else is
//! indistinguishable from one that does not exist, and ownership cannot
//! change between a check and a write.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::domain::{Expense, ExpenseId, NewExpense, UpdateExpense, UserId};
use crate::errors::{Error, Result};
use crate::storage::DbPool;

#[derive(Debug, Clone, FromRow)]
struct ExpenseRow {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExpenseRow {
    fn into_expense(self) -> Expense {
        Expense {
            id: ExpenseId::from_string(self.id),
            description: self.description,
            amount: self.amount,
            date: self.date,
            category: self.category,
            owner_id: UserId::from_string(self.owner_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const SELECT_COLUMNS: &str =
    "id, description, amount, date, category, owner_id, created_at, updated_at";

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// List all expenses owned by the given user, oldest first.
    async fn list_for_owner(&self, owner: &UserId) -> Result<Vec<Expense>>;

    /// Persist a new expense.
    async fn create(&self, expense: NewExpense) -> Result<Expense>;

    /// Apply a partial update to the expense matching `(id, owner)`. Fails
    /// with a not-found error when no such record exists for that owner.
    async fn update(
        &self,
        id: &ExpenseId,
        owner: &UserId,
        update: UpdateExpense,
    ) -> Result<Expense>;

    /// Delete the expense matching `(id, owner)`. Fails with a not-found
    /// error when no such record exists for that owner.
    async fn delete(&self, id: &ExpenseId, owner: &UserId) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct SqlxExpenseRepository {
    pool: DbPool,
}

impl SqlxExpenseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn fetch_owned(&self, id: &ExpenseId, owner: &UserId) -> Result<Expense> {
        let row: Option<ExpenseRow> = sqlx::query_as(&format!(
            "SELECT {} FROM expenses WHERE id = $1 AND owner_id = $2",
            SELECT_COLUMNS
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| Error::database(err, "Failed to fetch expense"))?;

        row.map(ExpenseRow::into_expense)
            .ok_or_else(|| Error::not_found("expense", id.as_str()))
    }
}

#[async_trait]
impl ExpenseRepository for SqlxExpenseRepository {
    async fn list_for_owner(&self, owner: &UserId) -> Result<Vec<Expense>> {
        let rows: Vec<ExpenseRow> = sqlx::query_as(&format!(
            "SELECT {} FROM expenses WHERE owner_id = $1 ORDER BY created_at, id",
            SELECT_COLUMNS
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| Error::database(err, "Failed to list expenses"))?;

        Ok(rows.into_iter().map(ExpenseRow::into_expense).collect())
    }

    async fn create(&self, expense: NewExpense) -> Result<Expense> {
        let id = ExpenseId::new();
        sqlx::query(
            "INSERT INTO expenses (id, description, amount, date, category, owner_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)",
        )
        .bind(&id)
        .bind(&expense.description)
        .bind(expense.amount)
        .bind(expense.date)
        .bind(&expense.category)
        .bind(&expense.owner_id)
        .execute(&self.pool)
        .await
        .map_err(|err| Error::database(err, "Failed to insert expense"))?;

        self.fetch_owned(&id, &expense.owner_id).await
    }

    async fn update(
        &self,
        id: &ExpenseId,
        owner: &UserId,
        update: UpdateExpense,
    ) -> Result<Expense> {
        // Single statement with a combined (id, owner_id) filter; COALESCE
        // keeps omitted fields untouched.
        let result = sqlx::query(
            "UPDATE expenses SET \
                 description = COALESCE($3, description), \
                 amount = COALESCE($4, amount), \
                 date = COALESCE($5, date), \
                 category = COALESCE($6, category), \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 AND owner_id = $2",
        )
        .bind(id)
        .bind(owner)
        .bind(update.description.as_ref())
        .bind(update.amount)
        .bind(update.date)
        .bind(update.category.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|err| Error::database(err, "Failed to update expense"))?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("expense", id.as_str()));
        }

        self.fetch_owned(id, owner).await
    }

    async fn delete(&self, id: &ExpenseId, owner: &UserId) -> Result<()> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|err| Error::database(err, "Failed to delete expense"))?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("expense", id.as_str()));
        }

        Ok(())
    }
}
