//! Payment Tracker State
//!
//! Search / loading / results / not-found transitions for the tracking page.

use crate::error::{ApiError, ValidationError};
use crate::models::Payment;

pub const SEARCH_FAILURE_MESSAGE: &str = "Failed to fetch payment records. Please try again.";

/// Which part of the tracking page is visible
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TrackerView {
    #[default]
    Search,
    Loading { key: String },
    Results { key: String, payments: Vec<Payment> },
    NoResults { key: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    /// Contents of the lookup input
    pub query: String,
    pub view: TrackerView,
}

impl TrackerState {
    /// Validate the lookup key and enter the loading view.
    pub fn begin_search(&mut self) -> Result<String, ValidationError> {
        let key = self.query.trim().to_string();
        if key.is_empty() {
            return Err(ValidationError::EmptyLookupKey);
        }
        self.view = TrackerView::Loading { key: key.clone() };
        Ok(key)
    }

    /// Apply a lookup result. Failures go back to the search view with the key kept for retry.
    pub fn finish_search(&mut self, outcome: Result<Vec<Payment>, ApiError>) -> Option<SearchFailure> {
        let key = match &self.view {
            TrackerView::Loading { key } => key.clone(),
            _ => return None,
        };
        match outcome {
            Ok(payments) if payments.is_empty() => {
                self.view = TrackerView::NoResults { key };
                None
            }
            Ok(payments) => {
                self.view = TrackerView::Results { key, payments };
                None
            }
            Err(error) => {
                self.view = TrackerView::Search;
                Some(SearchFailure { error })
            }
        }
    }

    /// Manual reset back to an empty search form
    pub fn show_search_form(&mut self) {
        self.query.clear();
        self.view = TrackerView::Search;
    }

    /// Number shown in the results header
    pub fn record_count(&self) -> usize {
        match &self.view {
            TrackerView::Results { payments, .. } => payments.len(),
            _ => 0,
        }
    }

    /// Text of the `#recordCount` element: the bare number of cards
    pub fn record_count_label(&self) -> String {
        self.record_count().to_string()
    }
}

/// A lookup that did not complete
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFailure {
    pub error: ApiError,
}

impl SearchFailure {
    /// The user always sees the same text, whatever the server sent
    pub fn message(&self) -> &'static str {
        SEARCH_FAILURE_MESSAGE
    }
}

pub fn not_found_message(key: &str) -> String {
    format!("No payment records were found for matriculation number: {}", key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(id: u32) -> Payment {
        Payment {
            id,
            name: "Ada Obi".to_string(),
            matric_number: "CS/2021/001".to_string(),
            amount: 200,
            reason: None,
            receipt: Some(format!("/media/receipt_images/{}.png", id)),
            confirmed: id % 2 == 0,
            timestamp: "2025-08-03T13:55:53Z".to_string(),
        }
    }

    fn searching(query: &str) -> TrackerState {
        let mut state = TrackerState { query: query.to_string(), ..Default::default() };
        state.begin_search().unwrap();
        state
    }

    #[test]
    fn test_empty_key_rejected_locally() {
        let mut state = TrackerState { query: "   ".to_string(), ..Default::default() };
        assert_eq!(state.begin_search(), Err(ValidationError::EmptyLookupKey));
        assert_eq!(state.view, TrackerView::Search);
    }

    #[test]
    fn test_search_enters_loading() {
        let state = searching(" CS/2021/001 ");
        assert_eq!(state.view, TrackerView::Loading { key: "CS/2021/001".to_string() });
    }

    #[test]
    fn test_zero_records_echo_key() {
        let mut state = searching("CS/2021/001");
        assert_eq!(state.finish_search(Ok(vec![])), None);
        assert_eq!(state.view, TrackerView::NoResults { key: "CS/2021/001".to_string() });
        assert!(not_found_message("CS/2021/001").contains("CS/2021/001"));
        assert_eq!(state.record_count(), 0);
    }

    #[test]
    fn test_results_keep_server_order() {
        let mut state = searching("CS/2021/001");
        state.finish_search(Ok(vec![payment(4), payment(1), payment(7)]));
        match &state.view {
            TrackerView::Results { payments, .. } => {
                let ids: Vec<u32> = payments.iter().map(|p| p.id).collect();
                assert_eq!(ids, vec![4, 1, 7]);
            }
            other => panic!("unexpected view {:?}", other),
        }
        assert_eq!(state.record_count(), 3);
        assert_eq!(state.record_count_label(), "3");
    }

    #[test]
    fn test_server_error_text_is_not_shown() {
        let mut state = searching("CS/2021/001");
        let failure = state
            .finish_search(Err(ApiError::Http { status: 404, body: r#"{"detail": "Not found."}"#.to_string() }))
            .unwrap();
        assert_eq!(failure.message(), "Failed to fetch payment records. Please try again.");
        assert_eq!(state.view, TrackerView::Search);
    }

    #[test]
    fn test_failure_returns_to_search() {
        let mut state = searching("CS/2021/001");
        let failure = state.finish_search(Err(ApiError::Network("offline".to_string())));
        assert_eq!(failure.map(|f| f.error), Some(ApiError::Network("offline".to_string())));
        assert_eq!(state.view, TrackerView::Search);
        assert_eq!(state.query, "CS/2021/001");
    }

    #[test]
    fn test_late_result_after_reset_is_ignored() {
        let mut state = searching("CS/2021/001");
        state.show_search_form();
        assert_eq!(state.finish_search(Ok(vec![payment(1)])), None);
        assert_eq!(state.view, TrackerView::Search);
        assert!(state.query.is_empty());
    }
}
