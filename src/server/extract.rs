use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use serde::de::DeserializeOwned;

use crate::error::ItemDeskError;

const INVALID_BODY: &str = "Invalid JSON body";

/// JSON request body that reads like a body-parser middleware.
///
/// Requests without a JSON content type, or with a blank body, yield
/// `T::default()`. A declared JSON body must decode to an object.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ItemDeskError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ItemDeskError::validation(INVALID_BODY))?;

        if !declared_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|_| ItemDeskError::validation(INVALID_BODY))?;
        if !value.is_object() {
            return Err(ItemDeskError::validation(INVALID_BODY));
        }

        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|_| ItemDeskError::validation(INVALID_BODY))
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
        || mime.to_ascii_lowercase().ends_with("+json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(is_json_content_type("application/merge-patch+json"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type(""));
    }
}
