//! Row-Level Security (RLS) context management.
//!
//! Every query against `expenses` runs inside a transaction that has
//! `app.current_user_id` set, so the table's policy only ever exposes the
//! caller's own rows.
//!
//! # Usage
//!
//! ```ignore
//! use tally_db::rls::OwnerScope;
//!
//! let scope = OwnerScope::begin(&db, owner).await?;
//! let rows = expenses::Entity::find().all(scope.transaction()).await?;
//! scope.commit().await?;
//! ```

use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tally_shared::types::UserId;

/// A transaction bound to one owner's rows.
pub struct OwnerScope {
    txn: DatabaseTransaction,
}

impl OwnerScope {
    /// Begins a transaction and sets the owner with `SET LOCAL`, which
    /// scopes the setting to this transaction only.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or the context
    /// cannot be set.
    pub async fn begin(db: &DatabaseConnection, owner: UserId) -> Result<Self, DbErr> {
        let txn = db.begin().await?;
        txn.execute_unprepared(&owner_context_sql(owner)).await?;
        Ok(Self { txn })
    }

    /// Returns the underlying transaction for executing queries.
    #[must_use]
    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Commits the transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails.
    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }
}

/// SQL that sets the owner context. A `UserId` is always a UUID, so
/// interpolating it cannot inject anything.
fn owner_context_sql(owner: UserId) -> String {
    format!("SET LOCAL app.current_user_id = '{owner}'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_owner_context_sql() {
        let owner = UserId::from_uuid(
            Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
        );
        assert_eq!(
            owner_context_sql(owner),
            "SET LOCAL app.current_user_id = '550e8400-e29b-41d4-a716-446655440000'"
        );
    }
}
