//! JSON body extractor that also runs `validator` rules.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use validator::Validate;

use franchise_core::error::{AppError, ErrorKind};

use crate::error::ApiError;

/// Deserializes a JSON body and validates it.
///
/// Malformed JSON, wrong field types and failed rules all become 400
/// responses in the standard error shape. Oversized bodies stay 413.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value
            .validate()
            .map_err(|errors| invalid(errors.to_string()))?;

        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::new(ErrorKind::PayloadTooLarge, rejection.body_text()).into();
    }
    invalid(rejection.body_text())
}

fn invalid(message: String) -> ApiError {
    AppError::validation(message)
        .titled("Invalid request data")
        .into()
}
