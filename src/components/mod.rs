//! UI Components
//!
//! Page controllers and the pieces they render.

mod dashboard;
mod nav_bar;
mod notice_banner;
mod payment_card;
mod payment_form;
mod payment_tracker;
mod receipt_preview;
mod status_badge;

pub use dashboard::DashboardPage;
pub use nav_bar::NavBar;
pub use notice_banner::NoticeBanner;
pub use payment_card::PaymentCard;
pub use payment_form::PaymentForm;
pub use payment_tracker::PaymentTracker;
pub use receipt_preview::ReceiptPreview;
pub use status_badge::StatusBadge;
