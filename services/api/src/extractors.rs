use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use rollcall_common::error::RollcallError;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body that rejects with the error envelope.
///
/// The `Content-Type` header is not inspected; any body that decodes as
/// `T` is accepted. Decoder errors surface as 400 with the decoder's text.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError(RollcallError::BadRequest(e.body_text())))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError(RollcallError::BadRequest(e.to_string())))
    }
}
