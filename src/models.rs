//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// A payment record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub name: String,
    #[serde(deserialize_with = "matric_from_text_or_number")]
    pub matric_number: String,
    pub amount: i64,
    #[serde(default)]
    pub reason: Option<String>,
    /// The tracking endpoint calls this `receipt`, the admin endpoints `receipt_url`.
    #[serde(default, alias = "receipt_url")]
    pub receipt: Option<String>,
    pub confirmed: bool,
    pub timestamp: String,
}

/// Aggregate counters shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: u32,
    pub confirmed: u32,
    pub pending: u32,
    pub total_amount: i64,
}

/// Response of the dashboard-data endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Debug, Serialize)]
pub struct ToggleConfirmationArgs {
    pub payment_id: u32,
    pub confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToggleConfirmationResponse {
    pub success: bool,
    #[serde(default)]
    pub confirmed: Option<bool>,
    #[serde(default)]
    pub message: String,
}

/// Outcome of a successful confirmation change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResult {
    pub confirmed: bool,
    pub message: String,
}

/// Matric numbers are stored as integers by the backend but entered as free text.
fn matric_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Matric {
        Text(String),
        Number(i64),
    }

    Ok(match Matric::deserialize(deserializer)? {
        Matric::Text(text) => text,
        Matric::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_from_tracking_endpoint() {
        let json = r#"{
            "id": 4,
            "name": "Ada Obi",
            "matric_number": 190404,
            "amount": 200,
            "reason": "Course materials",
            "receipt": "http://127.0.0.1:8000/media/receipt_images/r.png",
            "confirmed": true,
            "timestamp": "2025-08-03T13:55:53.476959Z"
        }"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.matric_number, "190404");
        assert_eq!(payment.receipt.as_deref(), Some("http://127.0.0.1:8000/media/receipt_images/r.png"));
        assert!(payment.confirmed);
    }

    #[test]
    fn test_payment_from_admin_endpoint() {
        let json = r#"{
            "id": 9,
            "name": "Ada Obi",
            "matric_number": "CS/2021/001",
            "amount": 1500,
            "receipt_url": null,
            "confirmed": false,
            "timestamp": "Aug 03, 2025 01:55 PM"
        }"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.matric_number, "CS/2021/001");
        assert_eq!(payment.reason, None);
        assert_eq!(payment.receipt, None);
    }

    #[test]
    fn test_dashboard_data_without_payments() {
        let json = r#"{"stats": {"total": 3, "confirmed": 1, "pending": 2, "total_amount": 500}}"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.stats.pending, 2);
        assert!(data.payments.is_empty());
    }
}
