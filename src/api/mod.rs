//! Backend API Bindings
//!
//! HTTP wrappers for the payments API and the admin dashboard, organized by page.

mod admin;
mod payments;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub use admin::*;
pub use payments::*;

/// Read a response body and decode it as JSON, mapping non-2xx to `ApiError::Http`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await?;
    decode_body(status, ok, &body)
}

fn decode_body<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    if !ok {
        return Err(ApiError::Http { status, body: body.to_string() });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
