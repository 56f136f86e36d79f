//! Postgres employee store
//!
//! - insert: `RETURNING` the generated id in one round trip
//! - save: `ON CONFLICT (id)` upsert inside a transaction that also moves
//!   the id sequence forward when a new id was written

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::{DbError, EmployeeStore};
use crate::models::{Employee, NewEmployee};

/// Employee store over a sqlx pool
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DbError> {
        let row: Employee = sqlx::query_as(
            r#"
            INSERT INTO employees (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DbError> {
        let row: Option<Employee> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbError> {
        let row: Option<Employee> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email
            FROM employees
            WHERE email = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, DbError> {
        let row: Option<Employee> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email
            FROM employees
            WHERE first_name = $1 AND last_name = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DbError> {
        let rows: Vec<Employee> = sqlx::query_as(
            "SELECT id, first_name, last_name, email FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, DbError> {
        let mut tx = self.pool.begin().await?;

        // xmax = 0 only for a freshly inserted tuple
        let row = sqlx::query(
            r#"
            INSERT INTO employees (id, first_name, last_name, email)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                email = EXCLUDED.email
            RETURNING id, first_name, last_name, email, (xmax = 0) AS inserted
            "#,
        )
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&mut *tx)
        .await?;

        let saved = Employee {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            email: row.get("email"),
        };

        if row.get::<bool, _>("inserted") {
            // Never moves the sequence backwards
            sqlx::query(
                r#"
                SELECT setval(
                    'employees_id_seq',
                    GREATEST($1, (SELECT last_value FROM employees_id_seq))
                )
                "#,
            )
            .bind(saved.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DbError> {
        sqlx::query("DELETE FROM employees")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
