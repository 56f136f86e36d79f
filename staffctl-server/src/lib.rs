//! staffctl-server: employee records over HTTP
//!
//! Layers, from the bottom up:
//! - `models`: the `Employee` record and its validation
//! - `db`: connection pool, schema bootstrap and the `EmployeeStore` seam
//! - `service`: the duplicate-email rule and CRUD orchestration
//! - `http`: axum router, handlers and JSON error mapping

pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use db::{DbError, EmployeeStore, MemoryEmployeeStore, PgEmployeeStore};
pub use models::{Employee, NewEmployee, ValidationError};
pub use service::{EmployeeService, ServiceError};
