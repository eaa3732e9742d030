//! Account service - Registration and credential changes.
//!
//! Both entry points run the CPF and password validators before touching
//! the repository, so nothing invalid is ever stored.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateUser, Cpf, Password, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new user
    async fn register(&self, data: CreateUser) -> AppResult<User>;

    /// Replace a user's password after checking the current one
    async fn change_password(
        &self,
        id: Uuid,
        current_password: String,
        new_password: String,
    ) -> AppResult<()>;
}

/// Concrete implementation of AccountService.
pub struct Accounts {
    repo: Arc<dyn UserRepository>,
}

impl Accounts {
    /// Create new account service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AccountService for Accounts {
    async fn register(&self, data: CreateUser) -> AppResult<User> {
        let cpf = Cpf::parse(&data.cpf)?;
        // Hashing happens only once the policy check inside Password::new passes
        let password = Password::new(&data.password)?;

        if self.repo.find_by_email(&data.email).await?.is_some() {
            tracing::debug!("Registration rejected: email already in use");
            return Err(AppError::conflict("Email"));
        }
        if self.repo.find_by_cpf(&cpf).await?.is_some() {
            tracing::debug!(cpf = %cpf.masked(), "Registration rejected: CPF already in use");
            return Err(AppError::conflict("CPF"));
        }

        let user = User::new(
            data.name,
            cpf,
            data.email,
            password.into_string(),
            data.address,
        );
        let user = self.repo.create(user).await?;

        tracing::info!(user_id = %user.id, cpf = %user.cpf.masked(), "User registered");
        Ok(user)
    }

    async fn change_password(
        &self,
        id: Uuid,
        current_password: String,
        new_password: String,
    ) -> AppResult<()> {
        let mut user = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        let stored = Password::from_hash(user.password_hash.clone());
        if !stored.verify(&current_password) {
            tracing::debug!(user_id = %id, "Password change rejected: wrong current password");
            return Err(AppError::InvalidCredentials);
        }
        if current_password == new_password {
            return Err(AppError::validation(
                "New password must differ from the current password",
            ));
        }

        let password = Password::new(&new_password)?;
        user.update_password_hash(password.into_string());
        self.repo.update(user).await?;

        tracing::info!(user_id = %id, "Password changed");
        Ok(())
    }
}
