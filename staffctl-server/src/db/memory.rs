//! In-memory employee store
//!
//! Same contract as the Postgres store, backed by a `BTreeMap` so listing
//! comes back in id order. Used for service and router tests, and anywhere
//! a database is not wanted.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, EmployeeStore};
use crate::models::{Employee, NewEmployee};

#[derive(Debug)]
struct Inner {
    rows: BTreeMap<i64, Employee>,
    next_id: i64,
}

/// Employee store held in process memory
#[derive(Debug)]
pub struct MemoryEmployeeStore {
    inner: RwLock<Inner>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DbError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let row = employee.clone().with_id(id);
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DbError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().find(|e| e.email == email).cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .find(|e| e.first_name == first_name && e.last_name == last_name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DbError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, DbError> {
        let mut inner = self.inner.write().await;
        inner.next_id = inner.next_id.max(employee.id.saturating_add(1));
        inner.rows.insert(employee.id, employee.clone());
        Ok(employee.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DbError> {
        self.inner.write().await.rows.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avishkar() -> NewEmployee {
        NewEmployee::new("Avishkar", "Singh", "avishkar@gmail.com")
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = MemoryEmployeeStore::new();
        let first = store.insert(&avishkar()).await.unwrap();
        let second = store
            .insert(&NewEmployee::new("Rahul", "Dev", "kumar@gmail.com"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.find_by_id(1).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn find_by_email_is_exact() {
        let store = MemoryEmployeeStore::new();
        store.insert(&avishkar()).await.unwrap();

        assert!(store.find_by_email("avishkar@gmail.com").await.unwrap().is_some());
        assert!(store.find_by_email("AVISHKAR@gmail.com").await.unwrap().is_none());
        assert!(store.find_by_email("avishkar").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_name_matches_both_names() {
        let store = MemoryEmployeeStore::new();
        let saved = store.insert(&avishkar()).await.unwrap();

        assert_eq!(
            store.find_by_name("Avishkar", "Singh").await.unwrap(),
            Some(saved)
        );
        assert!(store.find_by_name("Avishkar", "Dev").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_existing_row() {
        let store = MemoryEmployeeStore::new();
        let mut saved = store.insert(&avishkar()).await.unwrap();
        saved.apply(NewEmployee::new("Ram", "Jadhav", "ram@gmail.com"));

        store.save(&saved).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.find_by_id(saved.id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn save_unknown_id_inserts_and_advances_ids() {
        let store = MemoryEmployeeStore::new();
        store.save(&avishkar().with_id(10)).await.unwrap();

        let next = store
            .insert(&NewEmployee::new("Rahul", "Dev", "kumar@gmail.com"))
            .await
            .unwrap();

        assert_eq!(next.id, 11);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryEmployeeStore::new();
        let saved = store.insert(&avishkar()).await.unwrap();

        store.delete_by_id(saved.id).await.unwrap();
        store.delete_by_id(saved.id).await.unwrap();

        assert!(store.find_by_id(saved.id).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn delete_all_clears_rows() {
        let store = MemoryEmployeeStore::new();
        store.insert(&avishkar()).await.unwrap();
        store
            .insert(&NewEmployee::new("Rahul", "Dev", "kumar@gmail.com"))
            .await
            .unwrap();

        store.delete_all().await.unwrap();

        assert!(store.find_all().await.unwrap().is_empty());
    }
}
