//! Schema bootstrap for the employees table
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so this runs on each startup.

use sqlx::PgPool;

use super::DbError;

const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id         BIGSERIAL PRIMARY KEY,
        first_name VARCHAR(255) NOT NULL,
        last_name  VARCHAR(255) NOT NULL,
        email      VARCHAR(255) NOT NULL
    )
"#;

// Non-unique: update may write an email another row already holds.
const CREATE_EMAIL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_employees_email ON employees (email)";

const CREATE_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_employees_name ON employees (first_name, last_name)";

/// Create the employees table and its lookup indexes.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running employee migrations...");

    for statement in [CREATE_EMPLOYEES, CREATE_EMAIL_INDEX, CREATE_NAME_INDEX] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Employee migrations complete");
    Ok(())
}
