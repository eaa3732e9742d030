//! User service - Lookups and profile updates.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Cpf, UpdateUser, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::types::PaginationParams;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List one page of users, together with the total count
    async fn list_users(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)>;

    /// Find a user by CPF (bare or masked); the CPF is validated first
    async fn find_by_cpf(&self, raw_cpf: &str) -> AppResult<User>;

    /// Email address registered for a CPF
    async fn email_by_cpf(&self, raw_cpf: &str) -> AppResult<String>;

    /// Update name, address or role
    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)> {
        let total = self.repo.count().await?;
        let users = self.repo.list(params.offset(), params.limit()).await?;
        Ok((users, total))
    }

    async fn find_by_cpf(&self, raw_cpf: &str) -> AppResult<User> {
        let cpf = Cpf::parse(raw_cpf)?;
        tracing::debug!(cpf = %cpf.masked(), "Looking up user by CPF");
        self.repo.find_by_cpf(&cpf).await?.ok_or_not_found()
    }

    async fn email_by_cpf(&self, raw_cpf: &str) -> AppResult<String> {
        Ok(self.find_by_cpf(raw_cpf).await?.email)
    }

    async fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User> {
        let mut user = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        if let Some(name) = changes.name {
            user.update_name(name);
        }
        if let Some(address) = changes.address {
            user.update_address(address);
        }
        if let Some(role) = changes.role {
            if role != user.role {
                tracing::info!(user_id = %id, role = %role, "User role changed");
            }
            user.update_role(role);
        }

        self.repo.update(user).await
    }
}
