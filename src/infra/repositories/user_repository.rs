//! User repository with an in-memory backing store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Cpf, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Email and CPF are unique across all users.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find user by CPF
    async fn find_by_cpf(&self, cpf: &Cpf) -> AppResult<Option<User>>;

    /// Insert a new user
    async fn create(&self, user: User) -> AppResult<User>;

    /// Replace an existing user
    async fn update(&self, user: User) -> AppResult<User>;

    /// List users ordered by creation time
    async fn list(&self, offset: u64, limit: u64) -> AppResult<Vec<User>>;

    /// Count all users
    async fn count(&self) -> AppResult<u64>;
}

/// In-memory implementation of UserRepository
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject users whose email or CPF is already taken by someone else
    fn ensure_unique(users: &HashMap<Uuid, User>, candidate: &User) -> AppResult<()> {
        for existing in users.values().filter(|u| u.id != candidate.id) {
            if existing.email.eq_ignore_ascii_case(&candidate.email) {
                return Err(AppError::conflict("Email"));
            }
            if existing.cpf == candidate.cpf {
                return Err(AppError::conflict("CPF"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| &u.cpf == cpf).cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(AppError::conflict("User"));
        }
        Self::ensure_unique(&users, &user)?;

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(AppError::NotFound);
        }
        Self::ensure_unique(&users, &user)?;

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list(&self, offset: u64, limit: u64) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}
