//! Domain layer - Core business entities and logic
//!
//! Holds the CPF and password validators together with the value
//! objects and entities built on top of them (users, their plants and
//! care actions). Nothing here knows about HTTP or storage.

pub mod cpf;
pub mod password;
pub mod plant;
pub mod user;
pub mod validation;

pub use cpf::Cpf;
pub use password::Password;
pub use plant::{
    deserialize_care_time, parse_care_time, CareAction, CareKind, NewCareAction, NewPlant, Plant,
};
pub use user::{CreateUser, UpdateUser, User, UserResponse, UserRole};
pub use validation::{check_password, is_valid_cpf, is_valid_password, PasswordRule};
