//! Store seam for employee persistence
//!
//! `EmployeeStore` is the only thing the service depends on. The Postgres
//! implementation lives in `employees`; an in-memory one in `db::memory`.

pub mod employees;

use async_trait::async_trait;

use crate::models::{Employee, NewEmployee};

pub use employees::PgEmployeeStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence of employee rows keyed by id, with a secondary email lookup.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Persist a new row under a freshly assigned id.
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DbError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DbError>;

    /// Exact-match lookup. Lowest id wins if several rows share the email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbError>;

    /// Exact match on both names. Lowest id wins.
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, DbError>;

    /// Every row, ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>, DbError>;

    /// Upsert: overwrite the row with this id, or insert it under that id.
    async fn save(&self, employee: &Employee) -> Result<Employee, DbError>;

    /// Idempotent - returns Ok even if the row is already gone.
    async fn delete_by_id(&self, id: i64) -> Result<(), DbError>;

    async fn delete_all(&self) -> Result<(), DbError>;
}
