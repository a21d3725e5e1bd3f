//! Purchase request plumbing.
//!
//! Sends the order to the configured endpoint and hands the response to
//! [`SubmitOutcome::from_response`] for classification. Details that never
//! reach the page (status codes, transport errors, raw bodies) are logged to
//! the browser console.

use common::checkout::SubmitOutcome;
use common::requests::PurchaseRequest;
use gloo_console::error;
use gloo_net::http::Request;
use web_sys::RequestMode;

use crate::config::API_URL;

/// Issues the single `POST` for a purchase. Never retries.
pub async fn send_purchase(purchase: &PurchaseRequest) -> SubmitOutcome {
    let request = match Request::post(API_URL).mode(RequestMode::Cors).json(purchase) {
        Ok(request) => request,
        Err(err) => {
            error!(format!("Could not encode purchase request: {}", err));
            return SubmitOutcome::NetworkFailure;
        }
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            error!(format!("Submission error: {}", err));
            return SubmitOutcome::NetworkFailure;
        }
    };

    let status = response.status();
    if response.ok() {
        return SubmitOutcome::from_response(status, "");
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            error!(format!("Could not read API error response ({}): {}", status, err));
            return SubmitOutcome::Unreadable { status };
        }
    };

    let outcome = SubmitOutcome::from_response(status, &body);
    match &outcome {
        SubmitOutcome::Rejected(_) => {
            error!(format!("API error response ({}): {}", status, body));
        }
        SubmitOutcome::Unreadable { status } => {
            error!(format!("Unreadable API error response ({}): {}", status, body));
        }
        SubmitOutcome::Accepted | SubmitOutcome::NetworkFailure => {}
    }
    outcome
}
