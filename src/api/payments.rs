//! Payments API
//!
//! Public endpoints used by the submission form and the tracking page.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::read_json;
use crate::config::PortalConfig;
use crate::error::{ApiError, Field};
use crate::models::Payment;
use crate::state::ValidPayment;

/// Everything except unreserved characters, so `/` stays inside the segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub fn payments_by_matric_path(matric_number: &str) -> String {
    format!("/api/payments/{}/", utf8_percent_encode(matric_number, PATH_SEGMENT))
}

/// Submit a payment receipt as multipart form data
pub async fn create_payment(
    config: &PortalConfig,
    payment: &ValidPayment,
    receipt: &web_sys::File,
) -> Result<Payment, ApiError> {
    let form = build_form_data(payment, receipt)
        .map_err(|e| ApiError::Network(format!("could not build form data: {:?}", e)))?;
    let url = config.api_url("/api/payments/");
    web_sys::console::log_1(&format!("[API] POST {}", url).into());

    let response = Request::post(&url).body(form)?.send().await?;
    read_json(response).await
}

fn build_form_data(
    payment: &ValidPayment,
    receipt: &web_sys::File,
) -> Result<web_sys::FormData, wasm_bindgen::JsValue> {
    let form = web_sys::FormData::new()?;
    form.append_with_str(Field::Name.form_key(), &payment.name)?;
    form.append_with_str(Field::MatricNumber.form_key(), &payment.matric_number)?;
    form.append_with_str(Field::Reason.form_key(), &payment.reason)?;
    form.append_with_str(Field::Amount.form_key(), &payment.amount.to_string())?;
    form.append_with_blob_and_filename(Field::Receipt.form_key(), receipt, &receipt.name())?;
    Ok(form)
}

/// All payments recorded for a matric number, in server order
pub async fn list_payments_by_matric(
    config: &PortalConfig,
    matric_number: &str,
) -> Result<Vec<Payment>, ApiError> {
    let url = config.api_url(&payments_by_matric_path(matric_number));
    web_sys::console::log_1(&format!("[API] GET {}", url).into());

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    read_json(response).await
}
