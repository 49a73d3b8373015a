//! Request extractors whose rejections use the API error shape.

use axum::extract::{FromRequest, FromRequestParts};

use super::error::AppError;

/// JSON body extractor; schema violations become [`AppError::Validation`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor; parse failures become [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
