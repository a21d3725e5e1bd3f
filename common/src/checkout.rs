//! Checkout state machine.
//!
//! [`CheckoutState`] holds everything the purchase form shows: the selected
//! concert, the order draft, local and server-side field errors, and the
//! submission status. The UI layer forwards events to the transition methods
//! here and performs the single network call in between [`begin_submit`] and
//! [`complete_submit`].
//!
//! [`begin_submit`]: CheckoutState::begin_submit
//! [`complete_submit`]: CheckoutState::complete_submit

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::concert::{Concert, find_concert};
use crate::model::field::Field;
use crate::model::order::OrderDraft;
use crate::requests::{ProblemDetails, PurchaseRequest};
use crate::validation::{FieldErrors, validate};

pub const FIX_ERRORS_MESSAGE: &str = "Please fix the validation errors below";
pub const PURCHASE_FAILED_MESSAGE: &str = "Failed to purchase ticket. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Page-level error message.
    Failed(String),
}

/// How a purchase request ended, as observed by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The API answered with a 2xx status.
    Accepted,
    /// The API answered with an error status and a readable problem body.
    Rejected(ProblemDetails),
    /// The API answered with an error status whose body was not valid JSON.
    Unreadable { status: u16 },
    /// No response was obtained.
    NetworkFailure,
}

impl SubmitOutcome {
    /// Classifies an API response from its status code and raw body.
    ///
    /// Any 2xx status is accepted without looking at the body. Other statuses
    /// are rejections when the body parses as [`ProblemDetails`], and
    /// unreadable otherwise.
    pub fn from_response(status: u16, body: &str) -> Self {
        if (200..300).contains(&status) {
            return SubmitOutcome::Accepted;
        }
        match serde_json::from_str::<ProblemDetails>(body) {
            Ok(problem) => SubmitOutcome::Rejected(problem),
            Err(_) => SubmitOutcome::Unreadable { status },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutState {
    pub selected_concert_id: u32,
    pub draft: OrderDraft,
    pub field_errors: FieldErrors,
    /// Server messages keyed by lower-cased API field name.
    pub server_errors: BTreeMap<String, String>,
    pub status: SubmitStatus,
}

impl Default for CheckoutState {
    fn default() -> Self {
        let draft = OrderDraft::default();
        Self {
            selected_concert_id: draft.concert_id,
            draft,
            field_errors: FieldErrors::new(),
            server_errors: BTreeMap::new(),
            status: SubmitStatus::Idle,
        }
    }
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_concert(&mut self, id: u32) {
        self.selected_concert_id = id;
        self.draft.concert_id = id;
    }

    /// Stores a new value for `field` and drops that field's local error.
    pub fn update_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        self.field_errors.remove(&field);
    }

    /// Starts a submission attempt.
    ///
    /// Returns the request to send when the draft is valid. Otherwise the
    /// validation errors are stored and `None` is returned; no request must be
    /// sent. Also returns `None` while a previous submission is in flight.
    pub fn begin_submit(&mut self) -> Option<PurchaseRequest> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmitStatus::Idle;

        self.field_errors = validate(&self.draft);
        if !self.field_errors.is_empty() {
            return None;
        }

        let request = PurchaseRequest::from_draft(&self.draft)?;
        self.status = SubmitStatus::Submitting;
        Some(request)
    }

    /// Applies the result of the request issued after [`begin_submit`].
    ///
    /// [`begin_submit`]: CheckoutState::begin_submit
    pub fn complete_submit(&mut self, outcome: SubmitOutcome) {
        self.status = match outcome {
            SubmitOutcome::Accepted => {
                self.server_errors.clear();
                self.field_errors.clear();
                self.draft.reset();
                SubmitStatus::Succeeded
            }
            SubmitOutcome::Rejected(ProblemDetails {
                errors: Some(errors),
                ..
            }) => {
                self.server_errors = errors
                    .into_iter()
                    .map(|(key, messages)| (key.to_lowercase(), messages.join(", ")))
                    .collect();
                SubmitStatus::Failed(FIX_ERRORS_MESSAGE.to_string())
            }
            SubmitOutcome::Rejected(ProblemDetails { title, .. }) => SubmitStatus::Failed(
                title
                    .filter(|title| !title.is_empty())
                    .unwrap_or_else(|| PURCHASE_FAILED_MESSAGE.to_string()),
            ),
            SubmitOutcome::Unreadable { .. } => {
                SubmitStatus::Failed(PURCHASE_FAILED_MESSAGE.to_string())
            }
            SubmitOutcome::NetworkFailure => {
                SubmitStatus::Failed(NETWORK_ERROR_MESSAGE.to_string())
            }
        };
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn selected_concert(&self) -> Option<&'static Concert> {
        find_concert(self.selected_concert_id)
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn server_error(&self, field: Field) -> Option<&str> {
        self.server_errors.get(&field.server_key()).map(String::as_str)
    }

    /// Page-level error message, if the last submission failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Order total in cents: quantity times the selected concert's price, or
    /// zero when either is unknown.
    pub fn total_cents(&self) -> u64 {
        let price = self.selected_concert().map_or(0, |concert| concert.price_cents);
        let quantity = self.draft.quantity().unwrap_or(0);
        u64::from(quantity) * price
    }
}
