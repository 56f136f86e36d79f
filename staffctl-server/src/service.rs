//! Employee service
//!
//! Orchestrates the five CRUD operations over an injected `EmployeeStore`.
//! The only business rule is email uniqueness on create. It is a
//! check-then-insert against the store, so two concurrent creates with the
//! same email can both pass.

use std::sync::Arc;

use crate::db::{DbError, EmployeeStore};
use crate::models::{Employee, NewEmployee, ValidationError};

/// Service error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("employee already exists with email '{0}'")]
    DuplicateEmail(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] DbError),
}

/// Employee lifecycle operations
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Create an employee, rejecting an email that is already on file.
    ///
    /// The candidate is not persisted when the email exists.
    pub async fn create_employee(&self, candidate: NewEmployee) -> Result<Employee, ServiceError> {
        candidate.validate()?;

        if self.store.find_by_email(&candidate.email).await?.is_some() {
            tracing::warn!(email = %candidate.email, "rejected duplicate email");
            return Err(ServiceError::DuplicateEmail(candidate.email));
        }

        let employee = self.store.insert(&candidate).await?;
        tracing::info!(id = employee.id, "employee created");
        Ok(employee)
    }

    /// All employees; empty when none exist.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ServiceError> {
        let employees = self.store.find_all().await?;
        tracing::debug!(count = employees.len(), "listed employees");
        Ok(employees)
    }

    /// `None` means not found.
    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>, ServiceError> {
        let employee = self.store.find_by_id(id).await?;
        tracing::debug!(id, found = employee.is_some(), "employee lookup");
        Ok(employee)
    }

    /// Overwrite names and email of an existing employee.
    ///
    /// Returns `None` without touching the store when `id` is unknown.
    /// Email uniqueness against other rows is not re-checked here.
    pub async fn update_employee(
        &self,
        id: i64,
        patch: NewEmployee,
    ) -> Result<Option<Employee>, ServiceError> {
        patch.validate()?;

        let Some(mut existing) = self.store.find_by_id(id).await? else {
            tracing::debug!(id, "update target not found");
            return Ok(None);
        };

        existing.apply(patch);
        let updated = self.store.save(&existing).await?;
        tracing::info!(id, "employee updated");
        Ok(Some(updated))
    }

    /// Idempotent: deleting a missing id succeeds.
    pub async fn delete_employee(&self, id: i64) -> Result<(), ServiceError> {
        self.store.delete_by_id(id).await?;
        tracing::info!(id, "employee deleted");
        Ok(())
    }
}
