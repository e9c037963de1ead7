//! In-memory `UserStore` for router tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::users::{DbError, UserStore};
use crate::models::{User, UserInput};

#[derive(Default)]
struct Table {
    rows: Vec<User>,
    next_id: i32,
}

/// Mimics the `users` table: SERIAL ids from 1, UNIQUE email.
#[derive(Default)]
pub struct MemoryUserStore {
    table: Mutex<Table>,
    unavailable: bool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like a lost connection.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), DbError> {
        if self.unavailable {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }
}

fn unique_violation() -> DbError {
    sqlx::Error::Protocol(
        r#"duplicate key value violates unique constraint "users_email_key""#.to_owned(),
    )
    .into()
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        self.check()?;
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn get(&self, id: i32) -> Result<User, DbError> {
        self.check()?;
        self.table
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(DbError::NotFound { id })
    }

    async fn create(&self, input: &UserInput) -> Result<User, DbError> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        if table.rows.iter().any(|u| u.email == input.email) {
            return Err(unique_violation());
        }
        table.next_id += 1;
        let user = input.clone().into_user(table.next_id);
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, input: &UserInput) -> Result<u64, DbError> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        let exists = table.rows.iter().any(|u| u.id == id);
        if exists
            && table
                .rows
                .iter()
                .any(|u| u.id != id && u.email == input.email)
        {
            return Err(unique_violation());
        }
        let mut touched = 0;
        for row in table.rows.iter_mut().filter(|u| u.id == id) {
            row.name = input.name.clone();
            row.email = input.email.clone();
            touched += 1;
        }
        Ok(touched)
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|u| u.id != id);
        Ok((before - table.rows.len()) as u64)
    }
}
