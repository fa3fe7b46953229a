//! Request extractors whose rejections render as [`ApiError`] JSON.
//!
//! Axum's stock `Path` and `Query` reject with a plain-text body before the
//! handler runs. These wrappers route the rejection through [`ApiError`] so
//! every 4xx carries the same `{error, status}` body.

use axum::extract::FromRequestParts;

use crate::error::ApiError;

/// [`axum::extract::Path`] with an [`ApiError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// [`axum::extract::Query`] with an [`ApiError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
