//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::auth_handler::CpfRequest;
use super::plant_handler::{add_plant, list_user_plants};
use crate::api::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::api::validators::validate_password;
use crate::api::AppState;
use crate::domain::{UpdateUser, UserResponse, UserRole};
use crate::errors::AppResult;
use crate::types::{NoContent, Paginated, PaginationParams, UserPage};

/// User update request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New full name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Maria Souza")]
    pub name: Option<String>,
    /// New postal address
    #[validate(length(min = 1, message = "Address cannot be empty"))]
    #[schema(example = "Avenida Paulista, 1000")]
    pub address: Option<String>,
    /// New role
    pub role: Option<UserRole>,
}

/// Password change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    /// Password currently in use
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// Replacement password, subject to the password policy
    #[validate(custom(function = "validate_password"))]
    #[schema(example = "NovaSenha99", min_length = 8)]
    pub new_password: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/lookup", post(lookup_user))
        .route("/:id", get(get_user).patch(update_user))
        .route("/:id/password", put(change_password))
        .route("/:id/plants", get(list_user_plants).post(add_plant))
}

/// List users, one page at a time
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of users", body = UserPage)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<Json<Paginated<UserResponse>>> {
    let (users, total) = state.user_service.list_users(&params).await?;
    let data = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(Paginated::new(data, params.page.max(1), params.limit(), total)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update name, address or role
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let changes = UpdateUser {
        name: payload.name,
        address: payload.address,
        role: payload.role,
    };
    let user = state.user_service.update_user(id, changes).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Change a user's password
#[utoipa::path(
    put,
    path = "/users/{id}/password",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = ChangePasswordRequest,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "New password violates the password policy"),
        (status = 401, description = "Current password is wrong"),
        (status = 404, description = "User not found")
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<NoContent> {
    state
        .account_service
        .change_password(id, payload.current_password, payload.new_password)
        .await?;
    Ok(NoContent)
}

/// Find a user by CPF
#[utoipa::path(
    post,
    path = "/users/lookup",
    tag = "Users",
    request_body = CpfRequest,
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Invalid CPF"),
        (status = 404, description = "No user with this CPF")
    )
)]
pub async fn lookup_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CpfRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.find_by_cpf(&payload.cpf).await?;
    Ok(Json(UserResponse::from(user)))
}
