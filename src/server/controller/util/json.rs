use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    model::api::ErrorDto,
    server::error::validation::{FieldError, ValidationError},
};

/// JSON request body whose deserialization failures are reported as validation errors.
///
/// An unknown enum variant, a missing or mistyped field, or malformed JSON responds with
/// 400 and the offending property, matching the errors of request validation.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err((
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorDto {
                    error: "Expected request with `Content-Type: application/json`".to_string(),
                    correlation_id: None,
                }),
            )
                .into_response());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
        let value = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|err| ValidationError::from(body_field_error(err)).into_response())?;
        deserializer
            .end()
            .map_err(|err| ValidationError::single("body", err.to_string()).into_response())?;

        Ok(Self(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json")
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

/// Maps a body deserialization error to the property it concerns
///
/// Errors at the document root are reported on `body`, except missing fields which are
/// reported on the field itself.
fn body_field_error(err: serde_path_to_error::Error<serde_json::Error>) -> FieldError {
    let path = err.path().to_string();
    let inner = err.into_inner();
    let message = inner.to_string();

    if path != "." {
        return FieldError::new(path, message);
    }

    let missing_field = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next());

    match missing_field {
        Some(field) => FieldError::new(field, format!("The {} field is required", field)),
        None => FieldError::new("body", message),
    }
}
