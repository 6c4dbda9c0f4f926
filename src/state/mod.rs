//! Page State
//!
//! DOM-free state machines behind the page components.

pub mod dashboard;
pub mod form;
pub mod tracker;

pub use dashboard::{DashboardState, DashboardStateStoreFields, DashboardStore, PaymentRow, RowsStatus, StatusFilter};
pub use form::{FilePreview, FormState, ReceiptInfo, SubmitStep, ValidPayment};
pub use tracker::{TrackerState, TrackerView};
