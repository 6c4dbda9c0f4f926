//! Admin Dashboard API
//!
//! Session-authenticated endpoints under the admin base.

use gloo_net::http::Request;

use super::read_json;
use crate::config::{PortalConfig, CSRF_HEADER_NAME};
use crate::error::ApiError;
use crate::models::{DashboardData, Payment, ToggleConfirmationArgs, ToggleConfirmationResponse, ToggleResult};
use crate::state::dashboard::TOGGLE_FAILURE_MESSAGE;

/// Aggregate stats plus the latest payments
pub async fn fetch_dashboard_data(config: &PortalConfig) -> Result<DashboardData, ApiError> {
    let url = config.admin_url("/api/dashboard-data/");
    web_sys::console::log_1(&format!("[API] GET {}", url).into());

    let response = Request::get(&url).send().await?;
    read_json(response).await
}

/// Set a payment's confirmation flag; returns the value the server stored
pub async fn toggle_confirmation(
    config: &PortalConfig,
    payment_id: u32,
    confirmed: bool,
    csrf_token: &str,
) -> Result<ToggleResult, ApiError> {
    let url = config.admin_url("/toggle-confirmation/");
    web_sys::console::log_1(&format!("[API] POST {} id={} confirmed={}", url, payment_id, confirmed).into());

    let response = Request::post(&url)
        .header(CSRF_HEADER_NAME, csrf_token)
        .json(&ToggleConfirmationArgs { payment_id, confirmed })?
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    decode_toggle(status, &body, confirmed)
}

/// The toggle endpoint reports failures in the body (`success: false`), usually with a 400.
fn decode_toggle(status: u16, body: &str, requested: bool) -> Result<ToggleResult, ApiError> {
    match serde_json::from_str::<ToggleConfirmationResponse>(body) {
        Ok(resp) if resp.success => Ok(ToggleResult {
            confirmed: resp.confirmed.unwrap_or(requested),
            message: resp.message,
        }),
        Ok(resp) if resp.message.is_empty() => Err(ApiError::Rejected(TOGGLE_FAILURE_MESSAGE.to_string())),
        Ok(resp) => Err(ApiError::Rejected(resp.message)),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Http { status, body: body.to_string() }),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Full record for the detail modal
pub async fn fetch_payment_detail(config: &PortalConfig, payment_id: u32) -> Result<Payment, ApiError> {
    let url = config.admin_url(&format!("/payment/{}/", payment_id));
    web_sys::console::log_1(&format!("[API] GET {}", url).into());

    let response = Request::get(&url).send().await?;
    read_json(response).await
}
