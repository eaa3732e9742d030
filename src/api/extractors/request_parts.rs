//! Path and query extractors that reject with [`AppError`].
//!
//! axum's own `Path` and `Query` answer bad input with a plain-text body;
//! these wrappers route the same rejections through the JSON error
//! envelope every other endpoint uses.

use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    FromRequestParts,
};

use crate::errors::AppError;

/// Path parameters, e.g. `ApiPath(id): ApiPath<Uuid>`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}
