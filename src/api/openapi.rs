//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, plant_handler, user_handler};
use crate::domain::{CareAction, CareKind, Plant, UserResponse, UserRole};
use crate::types::{PaginationMeta, UserPage};

/// OpenAPI documentation for the plant-care user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Plant Care API",
        version = "0.1.0",
        description = "Users, plants and care history for the plant-care application, with CPF and password validation",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::email_lookup,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::change_password,
        user_handler::lookup_user,
        plant_handler::add_plant,
        plant_handler::list_user_plants,
        plant_handler::get_plant,
        plant_handler::record_care,
        plant_handler::care_history,
    ),
    components(
        schemas(
            UserRole,
            UserResponse,
            UserPage,
            PaginationMeta,
            auth_handler::RegisterRequest,
            auth_handler::CpfRequest,
            auth_handler::EmailResponse,
            user_handler::UpdateUserRequest,
            user_handler::ChangePasswordRequest,
            Plant,
            CareKind,
            CareAction,
            plant_handler::AddPlantRequest,
            plant_handler::RecordCareRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "Registration and account recovery"),
        (name = "Users", description = "User lookup and management"),
        (name = "Plants", description = "Plants and their care history")
    )
)]
pub struct ApiDoc;
