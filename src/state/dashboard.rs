//! Dashboard State
//!
//! Store for the admin dashboard plus the pure toggle/filter logic behind it.

use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::{DashboardStats, Payment, ToggleResult};

pub const REFRESH_SUCCESS_MESSAGE: &str = "Data refreshed successfully";
pub const REFRESH_FAILURE_MESSAGE: &str = "Failed to refresh data";
pub const TOGGLE_FAILURE_MESSAGE: &str = "Failed to update confirmation status";
pub const DETAIL_FAILURE_MESSAGE: &str = "Failed to load payment details";
const TOGGLE_SUCCESS_MESSAGE: &str = "Confirmation status updated";

/// A payment row: the badge follows `payment.confirmed`, the checkbox follows `control_checked`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub payment: Payment,
    pub control_checked: bool,
}

impl From<Payment> for PaymentRow {
    fn from(payment: Payment) -> Self {
        let control_checked = payment.confirmed;
        Self { payment, control_checked }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Confirmed,
    Pending,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Confirmed, StatusFilter::Pending];

    pub fn value(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Confirmed => "confirmed",
            StatusFilter::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Payments",
            StatusFilter::Confirmed => "Confirmed",
            StatusFilter::Pending => "Pending",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "confirmed" => StatusFilter::Confirmed,
            "pending" => StatusFilter::Pending,
            _ => StatusFilter::All,
        }
    }

    fn admits(self, confirmed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Confirmed => confirmed,
            StatusFilter::Pending => !confirmed,
        }
    }
}

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    pub stats: DashboardStats,
    pub rows: Vec<PaymentRow>,
    pub rows_status: RowsStatus,
    /// Global blocking overlay; at most one toggle or detail fetch at a time
    pub overlay_visible: bool,
    /// Record shown in the detail modal
    pub detail: Option<Payment>,
    pub search: String,
    pub status_filter: StatusFilter,
}

pub type DashboardStore = Store<DashboardState>;

/// An in-flight confirmation change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleTicket {
    pub payment_id: u32,
    pub desired: bool,
    /// Checkbox state before the user clicked
    pub prior: bool,
}

/// Record the user's click on a row checkbox. `None` if the row is unknown.
pub fn begin_toggle(rows: &mut [PaymentRow], payment_id: u32, desired: bool) -> Option<ToggleTicket> {
    let row = rows.iter_mut().find(|r| r.payment.id == payment_id)?;
    let prior = row.control_checked;
    row.control_checked = desired;
    Some(ToggleTicket { payment_id, desired, prior })
}

/// Apply the server's answer: on success the badge takes the server value,
/// on failure the checkbox goes back and the badge is left alone.
///
/// Returns `true` when the confirmed flag actually changed, i.e. the server's
/// counters need to be read again.
pub fn finish_toggle(rows: &mut [PaymentRow], ticket: &ToggleTicket, outcome: &Result<bool, ApiError>) -> bool {
    let Some(row) = rows.iter_mut().find(|r| r.payment.id == ticket.payment_id) else {
        return false;
    };
    match outcome {
        Ok(confirmed) => {
            let was = row.payment.confirmed;
            row.payment.confirmed = *confirmed;
            row.control_checked = *confirmed;
            was != *confirmed
        }
        Err(_) => {
            row.control_checked = ticket.prior;
            false
        }
    }
}

/// Whether the table holds server rows yet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowsStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl RowsStatus {
    /// Text shown in place of an empty table
    pub fn empty_message(self) -> &'static str {
        match self {
            RowsStatus::Loading => "Loading payments...",
            RowsStatus::Loaded => "No payments found",
            RowsStatus::Failed => "Could not load payments. Use Refresh to try again.",
        }
    }
}

/// Notification text for a finished toggle: `Ok` for a success notice, `Err` for an error notice
pub fn toggle_notice(outcome: &Result<ToggleResult, ApiError>) -> Result<String, String> {
    match outcome {
        Ok(result) if result.message.is_empty() => Ok(TOGGLE_SUCCESS_MESSAGE.to_string()),
        Ok(result) => Ok(result.message.clone()),
        Err(e) => Err(e.user_message(TOGGLE_FAILURE_MESSAGE)),
    }
}

pub fn rows_from_payments(payments: Vec<Payment>) -> Vec<PaymentRow> {
    payments.into_iter().map(PaymentRow::from).collect()
}

/// Rows matching the search text (name or matric, case-insensitive) and status filter
pub fn filter_rows(rows: &[PaymentRow], search: &str, status: StatusFilter) -> Vec<PaymentRow> {
    let needle = search.trim().to_lowercase();
    rows.iter()
        .filter(|row| status.admits(row.payment.confirmed))
        .filter(|row| {
            needle.is_empty()
                || row.payment.name.to_lowercase().contains(&needle)
                || row.payment.matric_number.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(id: u32, name: &str, matric: &str, confirmed: bool) -> Payment {
        Payment {
            id,
            name: name.to_string(),
            matric_number: matric.to_string(),
            amount: 1000 * id as i64,
            reason: None,
            receipt: None,
            confirmed,
            timestamp: "Aug 03, 2025 01:55 PM".to_string(),
        }
    }

    fn rows() -> Vec<PaymentRow> {
        rows_from_payments(vec![
            payment(1, "Ada Obi", "CS/2021/001", false),
            payment(2, "Tunde Bello", "EE/2020/114", true),
            payment(3, "Chioma Eze", "CS/2022/045", false),
        ])
    }

    #[test]
    fn test_failed_toggle_reverts_control_and_keeps_badge() {
        let mut rows = rows();
        let ticket = begin_toggle(&mut rows, 1, true).unwrap();
        assert!(rows[0].control_checked);

        let changed = finish_toggle(&mut rows, &ticket, &Err(ApiError::Network("offline".to_string())));
        assert!(!changed);
        assert!(!rows[0].control_checked);
        assert!(!rows[0].payment.confirmed);
    }

    #[test]
    fn test_rejected_toggle_reverts_control() {
        let mut rows = rows();
        let ticket = begin_toggle(&mut rows, 2, false).unwrap();
        finish_toggle(&mut rows, &ticket, &Err(ApiError::Rejected("nope".to_string())));
        assert!(rows[1].control_checked);
        assert!(rows[1].payment.confirmed);
    }

    #[test]
    fn test_successful_toggle_uses_server_value() {
        let mut rows = rows();
        let ticket = begin_toggle(&mut rows, 3, true).unwrap();
        let changed = finish_toggle(&mut rows, &ticket, &Ok(true));
        assert!(rows[2].payment.confirmed);
        assert!(rows[2].control_checked);
        assert!(changed);

        // server kept the old value: badge and checkbox both show it
        let ticket = begin_toggle(&mut rows, 1, true).unwrap();
        let changed = finish_toggle(&mut rows, &ticket, &Ok(false));
        assert!(!rows[0].payment.confirmed);
        assert!(!rows[0].control_checked);
        assert!(!changed);
    }

    #[test]
    fn test_unknown_row() {
        let mut rows = rows();
        assert_eq!(begin_toggle(&mut rows, 99, true), None);
    }

    #[test]
    fn test_settled_toggle_leaves_stats_to_the_server() {
        let mut state = DashboardState {
            stats: DashboardStats { total: 3, confirmed: 1, pending: 2, total_amount: 2000 },
            rows: rows(),
            ..DashboardState::default()
        };
        // a poll that ran after the server committed the toggle already carries it
        let ticket = begin_toggle(&mut state.rows, 3, true).unwrap();
        state.stats = DashboardStats { total: 3, confirmed: 2, pending: 1, total_amount: 5000 };

        assert!(finish_toggle(&mut state.rows, &ticket, &Ok(true)));
        assert_eq!(state.stats, DashboardStats { total: 3, confirmed: 2, pending: 1, total_amount: 5000 });
    }

    #[test]
    fn test_empty_table_messages() {
        assert_eq!(RowsStatus::default(), RowsStatus::Loading);
        assert_eq!(RowsStatus::Loaded.empty_message(), "No payments found");
        assert_ne!(RowsStatus::Failed.empty_message(), RowsStatus::Loaded.empty_message());
    }

    #[test]
    fn test_filter_by_search_and_status() {
        let rows = rows();
        let ids = |rows: Vec<PaymentRow>| rows.iter().map(|r| r.payment.id).collect::<Vec<_>>();

        assert_eq!(ids(filter_rows(&rows, "", StatusFilter::All)), vec![1, 2, 3]);
        assert_eq!(ids(filter_rows(&rows, "cs/20", StatusFilter::All)), vec![1, 3]);
        assert_eq!(ids(filter_rows(&rows, "BELLO", StatusFilter::All)), vec![2]);
        assert_eq!(ids(filter_rows(&rows, "", StatusFilter::Pending)), vec![1, 3]);
        assert_eq!(ids(filter_rows(&rows, "cs", StatusFilter::Confirmed)), Vec::<u32>::new());
    }

    #[test]
    fn test_status_filter_values() {
        for filter in StatusFilter::ALL {
            assert_eq!(StatusFilter::from_value(filter.value()), filter);
        }
        assert_eq!(StatusFilter::from_value("bogus"), StatusFilter::All);
    }

    #[test]
    fn test_toggle_notice_texts() {
        let ok = Ok(ToggleResult { confirmed: true, message: "Payment confirmed successfully".to_string() });
        assert_eq!(toggle_notice(&ok), Ok("Payment confirmed successfully".to_string()));

        let silent = Ok(ToggleResult { confirmed: false, message: String::new() });
        assert_eq!(toggle_notice(&silent), Ok(TOGGLE_SUCCESS_MESSAGE.to_string()));

        let rejected = Err(ApiError::Rejected("Payment not found".to_string()));
        assert_eq!(toggle_notice(&rejected), Err("Payment not found".to_string()));

        let offline = Err(ApiError::Network("offline".to_string()));
        assert_eq!(toggle_notice(&offline), Err(TOGGLE_FAILURE_MESSAGE.to_string()));
    }
}
