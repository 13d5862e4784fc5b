//! Postgres-backed expense store.
//!
//! Every call runs inside an [`OwnerScope`], so the table's RLS policy sees
//! the caller's identity. Queries also filter on `user_id` explicitly.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::warn;

use tally_core::expense::{
    Expense, ExpenseRecord, ExpenseStore, ExpenseUpdate, NewExpense, RecordRejection,
    StoreError, partition_records,
};
use tally_shared::types::{ExpenseId, UserId};

use crate::entities::expenses;
use crate::rls::OwnerScope;

/// Expense repository backed by the hosted `expenses` table.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn scope(&self, owner: UserId) -> Result<OwnerScope, StoreError> {
        OwnerScope::begin(&self.db, owner).await.map_err(map_db_err)
    }

    async fn find_owned(
        scope: &OwnerScope,
        owner: UserId,
        id: ExpenseId,
    ) -> Result<Expense, StoreError> {
        let model = expenses::Entity::find_by_id(id.into_inner())
            .filter(expenses::Column::UserId.eq(owner.into_inner()))
            .one(scope.transaction())
            .await
            .map_err(map_db_err)?
            .ok_or(StoreError::NotFound(id))?;

        Expense::try_from(to_record(model)).map_err(|rejection| {
            report_rejection(&rejection);
            StoreError::NotFound(id)
        })
    }
}

#[async_trait]
impl ExpenseStore for ExpenseRepository {
    async fn list_expenses(&self, owner: UserId) -> Result<Vec<Expense>, StoreError> {
        let scope = self.scope(owner).await?;

        let models = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(owner.into_inner()))
            .order_by_desc(expenses::Column::Date)
            .order_by_desc(expenses::Column::CreatedAt)
            .all(scope.transaction())
            .await
            .map_err(map_db_err)?;

        scope.commit().await.map_err(map_db_err)?;

        let (valid, rejected) = partition_records(models.into_iter().map(to_record));
        for rejection in &rejected {
            report_rejection(rejection);
        }
        Ok(valid)
    }

    async fn get_expense(&self, owner: UserId, id: ExpenseId) -> Result<Expense, StoreError> {
        let scope = self.scope(owner).await?;
        let expense = Self::find_owned(&scope, owner, id).await?;
        scope.commit().await.map_err(map_db_err)?;
        Ok(expense)
    }

    async fn create_expense(
        &self,
        owner: UserId,
        input: NewExpense,
    ) -> Result<Expense, StoreError> {
        let input = input.validate()?;
        let expense = Expense {
            id: ExpenseId::new(),
            owner,
            title: input.title,
            amount: input.amount,
            category: input.category,
            date: input.date,
            notes: input.notes,
            created_at: Utc::now(),
        };

        let scope = self.scope(owner).await?;
        let now = expense.created_at.into();
        expenses::ActiveModel {
            id: Set(expense.id.into_inner()),
            user_id: Set(owner.into_inner()),
            title: Set(expense.title.clone()),
            amount: Set(expense.amount.amount()),
            category: Set(expense.category.as_str().to_string()),
            date: Set(expense.date),
            notes: Set(expense.notes.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(scope.transaction())
        .await
        .map_err(map_db_err)?;
        scope.commit().await.map_err(map_db_err)?;

        Ok(expense)
    }

    async fn update_expense(
        &self,
        owner: UserId,
        id: ExpenseId,
        update: ExpenseUpdate,
    ) -> Result<Expense, StoreError> {
        let update = update.validate()?;

        let scope = self.scope(owner).await?;
        let mut expense = Self::find_owned(&scope, owner, id).await?;
        if update.is_empty() {
            scope.commit().await.map_err(map_db_err)?;
            return Ok(expense);
        }
        update.apply_to(&mut expense);

        expenses::ActiveModel {
            id: Set(id.into_inner()),
            title: Set(expense.title.clone()),
            amount: Set(expense.amount.amount()),
            category: Set(expense.category.as_str().to_string()),
            date: Set(expense.date),
            notes: Set(expense.notes.clone()),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .update(scope.transaction())
        .await
        .map_err(map_db_err)?;
        scope.commit().await.map_err(map_db_err)?;

        Ok(expense)
    }

    async fn delete_expense(&self, owner: UserId, id: ExpenseId) -> Result<(), StoreError> {
        let scope = self.scope(owner).await?;

        let result = expenses::Entity::delete_many()
            .filter(expenses::Column::Id.eq(id.into_inner()))
            .filter(expenses::Column::UserId.eq(owner.into_inner()))
            .exec(scope.transaction())
            .await
            .map_err(map_db_err)?;
        scope.commit().await.map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

/// Converts a row into an unvalidated record.
fn to_record(model: expenses::Model) -> ExpenseRecord {
    ExpenseRecord {
        id: ExpenseId::from_uuid(model.id),
        user_id: UserId::from_uuid(model.user_id),
        title: model.title,
        amount: model.amount,
        category: model.category,
        date: model.date,
        notes: model.notes,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn report_rejection(rejection: &RecordRejection) {
    warn!(
        expense_id = %rejection.id,
        reason = %rejection.reason,
        "Skipping invalid expense row"
    );
}

/// Maps database errors onto the store taxonomy.
///
/// RLS and privilege failures mean the backend refused the identity; every
/// other failure is treated as transport.
fn map_db_err(err: DbErr) -> StoreError {
    let message = err.to_string();
    let lowered = message.to_lowercase();
    if lowered.contains("permission denied") || lowered.contains("row-level security") {
        warn!(error = %message, "Database refused owner scope");
        return StoreError::Unauthenticated;
    }
    warn!(error = %message, "Database request failed");
    StoreError::TransportFailure(message)
}
