//! Payment Form State
//!
//! Field values, receipt preview and the submit lifecycle, independent of the DOM.

use crate::config::ACCEPTED_RECEIPT_TYPES;
use crate::error::{ApiError, Field, ValidationError};
use crate::models::Payment;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Payment confirmation submitted successfully!";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit. Please try again.";

/// Metadata of the selected receipt file
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptInfo {
    pub name: String,
    pub mime: String,
    pub size: f64,
}

impl ReceiptInfo {
    pub fn is_accepted_type(&self) -> bool {
        ACCEPTED_RECEIPT_TYPES.contains(&self.mime.as_str())
    }
}

/// How a receipt is previewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Pdf,
    Unsupported,
}

impl PreviewKind {
    pub fn for_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            PreviewKind::Image
        } else if mime == "application/pdf" {
            PreviewKind::Pdf
        } else {
            PreviewKind::Unsupported
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FilePreview {
    #[default]
    Empty,
    /// Image data is still being read
    Reading,
    Image { data_url: String },
    Pdf { file_name: String },
    Unsupported,
}

/// Raw form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentDraft {
    pub name: String,
    pub matric_number: String,
    pub amount: String,
    pub reason: String,
    pub receipt: Option<ReceiptInfo>,
}

/// Draft that passed validation, ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPayment {
    pub name: String,
    pub matric_number: String,
    pub amount: i64,
    pub reason: String,
}

impl PaymentDraft {
    pub fn validate(&self) -> Result<ValidPayment, ValidationError> {
        let required = [
            (Field::Name, &self.name),
            (Field::MatricNumber, &self.matric_number),
            (Field::Amount, &self.amount),
            (Field::Reason, &self.reason),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        match &self.receipt {
            Some(receipt) if receipt.size > 0.0 => {}
            _ => return Err(ValidationError::MissingField(Field::Receipt)),
        }

        let amount = self
            .amount
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidAmount)?;

        Ok(ValidPayment {
            name: self.name.trim().to_string(),
            matric_number: self.matric_number.trim().to_string(),
            amount,
            reason: self.reason.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

/// What `begin_submit` decided
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStep {
    /// A request is already in flight
    Busy,
    Invalid(ValidationError),
    Send(ValidPayment),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub draft: PaymentDraft,
    pub preview: FilePreview,
    pub phase: FormPhase,
    /// Bumped on every file change so late preview reads can be discarded
    preview_generation: u64,
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { "Submitting..." } else { "Submit Payment" }
    }

    /// Record a new file selection (or its removal).
    ///
    /// Returns the preview generation to hand back to `apply_image_preview`
    /// when the selection needs an image read.
    pub fn select_receipt(&mut self, receipt: Option<ReceiptInfo>) -> Option<u64> {
        self.preview_generation += 1;
        self.preview = FilePreview::Empty;
        let needs_read = match &receipt {
            None => false,
            Some(info) => match PreviewKind::for_mime(&info.mime) {
                PreviewKind::Image => {
                    self.preview = FilePreview::Reading;
                    true
                }
                PreviewKind::Pdf => {
                    self.preview = FilePreview::Pdf { file_name: info.name.clone() };
                    false
                }
                PreviewKind::Unsupported => {
                    self.preview = FilePreview::Unsupported;
                    false
                }
            },
        };
        self.draft.receipt = receipt;
        needs_read.then_some(self.preview_generation)
    }

    /// Apply a finished image read; ignored if a newer selection happened meanwhile.
    pub fn apply_image_preview(&mut self, generation: u64, data_url: Option<String>) -> bool {
        if generation != self.preview_generation {
            return false;
        }
        self.preview = match data_url {
            Some(data_url) => FilePreview::Image { data_url },
            None => FilePreview::Empty,
        };
        true
    }

    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.is_submitting() {
            return SubmitStep::Busy;
        }
        match self.draft.validate() {
            Ok(valid) => {
                self.phase = FormPhase::Submitting;
                SubmitStep::Send(valid)
            }
            Err(e) => SubmitStep::Invalid(e),
        }
    }

    /// Success clears everything; failure keeps the entered values.
    pub fn finish_submit(&mut self, outcome: &Result<Payment, ApiError>) {
        match outcome {
            Ok(_) => {
                let generation = self.preview_generation + 1;
                *self = FormState { preview_generation: generation, ..FormState::default() };
            }
            Err(_) => self.phase = FormPhase::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(mime: &str, size: f64) -> ReceiptInfo {
        ReceiptInfo { name: "receipt.png".to_string(), mime: mime.to_string(), size }
    }

    fn filled_state() -> FormState {
        let mut state = FormState::default();
        state.draft.name = "Ada Obi".to_string();
        state.draft.matric_number = "CS/2021/001".to_string();
        state.draft.amount = "2500".to_string();
        state.draft.reason = "Departmental dues".to_string();
        state.select_receipt(Some(receipt("image/png", 2048.0)));
        state
    }

    fn saved_payment() -> Payment {
        Payment {
            id: 1,
            name: "Ada Obi".to_string(),
            matric_number: "CS/2021/001".to_string(),
            amount: 2500,
            reason: Some("Departmental dues".to_string()),
            receipt: Some("/media/receipt_images/receipt.png".to_string()),
            confirmed: false,
            timestamp: "2025-08-03T13:55:53Z".to_string(),
        }
    }

    #[test]
    fn test_each_missing_field_blocks_submit() {
        let clear: [(Field, fn(&mut PaymentDraft)); 5] = [
            (Field::Name, |d| d.name.clear()),
            (Field::MatricNumber, |d| d.matric_number.clear()),
            (Field::Amount, |d| d.amount.clear()),
            (Field::Reason, |d| d.reason = "   ".to_string()),
            (Field::Receipt, |d| d.receipt = None),
        ];
        for (field, clear_field) in clear {
            let mut state = filled_state();
            clear_field(&mut state.draft);
            assert_eq!(state.begin_submit(), SubmitStep::Invalid(ValidationError::MissingField(field)));
            assert!(!state.is_submitting(), "{:?} should not start a request", field);
        }
    }

    #[test]
    fn test_empty_receipt_file_is_missing() {
        let mut state = filled_state();
        state.select_receipt(Some(receipt("image/png", 0.0)));
        assert_eq!(state.begin_submit(), SubmitStep::Invalid(ValidationError::MissingField(Field::Receipt)));
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            ValidationError::MissingField(Field::Amount).to_string(),
            "Please fill in all required fields."
        );
    }

    #[test]
    fn test_non_numeric_amount() {
        let mut state = filled_state();
        state.draft.amount = "two thousand".to_string();
        assert_eq!(state.begin_submit(), SubmitStep::Invalid(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_valid_submit_disables_button() {
        let mut state = filled_state();
        let step = state.begin_submit();
        assert!(matches!(step, SubmitStep::Send(ValidPayment { amount: 2500, .. })));
        assert!(state.is_submitting());
        assert_eq!(state.submit_label(), "Submitting...");
        assert_eq!(state.begin_submit(), SubmitStep::Busy);
    }

    #[test]
    fn test_success_clears_fields_and_preview() {
        let mut state = filled_state();
        let generation = 1;
        state.apply_image_preview(generation, Some("data:image/png;base64,AAAA".to_string()));
        state.begin_submit();
        state.finish_submit(&Ok(saved_payment()));

        assert_eq!(state.draft, PaymentDraft::default());
        assert_eq!(state.preview, FilePreview::Empty);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_failure_preserves_fields() {
        let mut state = filled_state();
        let before = state.draft.clone();
        state.begin_submit();
        state.finish_submit(&Err(ApiError::Network("offline".to_string())));

        assert_eq!(state.draft, before);
        assert!(!state.is_submitting());
        assert_eq!(state.submit_label(), "Submit Payment");
    }

    #[test]
    fn test_preview_kinds() {
        assert_eq!(PreviewKind::for_mime("image/jpeg"), PreviewKind::Image);
        assert_eq!(PreviewKind::for_mime("application/pdf"), PreviewKind::Pdf);
        assert_eq!(PreviewKind::for_mime("text/plain"), PreviewKind::Unsupported);

        let mut state = FormState::default();
        assert_eq!(state.select_receipt(Some(ReceiptInfo {
            name: "r.pdf".to_string(),
            mime: "application/pdf".to_string(),
            size: 10.0,
        })), None);
        assert_eq!(state.preview, FilePreview::Pdf { file_name: "r.pdf".to_string() });

        assert_eq!(state.select_receipt(Some(receipt("text/plain", 10.0))), None);
        assert_eq!(state.preview, FilePreview::Unsupported);

        state.select_receipt(None);
        assert_eq!(state.preview, FilePreview::Empty);
        assert_eq!(state.draft.receipt, None);
    }

    #[test]
    fn test_stale_image_read_is_discarded() {
        let mut state = FormState::default();
        let first = state.select_receipt(Some(receipt("image/png", 10.0))).unwrap();
        let second = state.select_receipt(Some(receipt("image/gif", 10.0))).unwrap();

        assert!(!state.apply_image_preview(first, Some("data:old".to_string())));
        assert_eq!(state.preview, FilePreview::Reading);
        assert!(state.apply_image_preview(second, Some("data:new".to_string())));
        assert_eq!(state.preview, FilePreview::Image { data_url: "data:new".to_string() });
    }

    #[test]
    fn test_accepted_types() {
        assert!(receipt("image/png", 1.0).is_accepted_type());
        assert!(!receipt("image/webp", 1.0).is_accepted_type());
    }
}
