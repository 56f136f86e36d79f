//! Database layer - connection pool, schema and stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Stores are injected behind the `EmployeeStore` trait
//! - Transactions for multi-step operations
//! - Email uniqueness is not a storage constraint; the service checks it

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use memory::MemoryEmployeeStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, EmployeeStore, PgEmployeeStore};
