//! # Extractors
//!
//! Wrappers around axum's `Json`, `Query` and `Path` whose rejections go
//! through [`AppError`], so malformed input gets the same `{ "error": ... }`
//! body as every other validation failure.

use axum::extract::{FromRequest, FromRequestParts};

use super::error_handling::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
