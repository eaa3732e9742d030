//! Registration and account recovery handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::validators::{validate_cpf, validate_password};
use crate::api::AppState;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::AppResult;
use crate::types::Created;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Full name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Maria Silva")]
    pub name: String,
    /// CPF, bare or masked
    #[validate(custom(function = "validate_cpf"))]
    #[schema(example = "123.456.789-09")]
    pub cpf: String,
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "maria@example.com")]
    pub email: String,
    /// Password: 8+ characters, no spaces, at least one digit and one uppercase letter
    #[validate(custom(function = "validate_password"))]
    #[schema(example = "Jardim2024", min_length = 8)]
    pub password: String,
    /// Postal address
    #[validate(length(min = 1, message = "Address is required"))]
    #[schema(example = "Rua das Flores, 100")]
    pub address: String,
}

/// Request carrying only a CPF
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CpfRequest {
    /// CPF, bare or masked
    #[validate(custom(function = "validate_cpf"))]
    #[schema(example = "12345678909", min_length = 11, max_length = 14)]
    pub cpf: String,
}

/// Email registered for a CPF
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmailResponse {
    #[schema(example = "maria@example.com")]
    pub email: String,
}

/// Create registration routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/email-lookup", post(email_lookup))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Invalid CPF, weak password or other validation error"),
        (status = 409, description = "Email or CPF already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .account_service
        .register(CreateUser {
            name: payload.name,
            cpf: payload.cpf,
            email: payload.email,
            password: payload.password,
            address: payload.address,
        })
        .await?;

    Ok(Created(UserResponse::from(user)))
}

/// Find the email address registered for a CPF
#[utoipa::path(
    post,
    path = "/auth/email-lookup",
    tag = "Authentication",
    request_body = CpfRequest,
    responses(
        (status = 200, description = "Email found", body = EmailResponse),
        (status = 400, description = "Invalid CPF"),
        (status = 404, description = "No user with this CPF")
    )
)]
pub async fn email_lookup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CpfRequest>,
) -> AppResult<Json<EmailResponse>> {
    let email = state.user_service.email_by_cpf(&payload.cpf).await?;
    Ok(Json(EmailResponse { email }))
}
