//! Wire types exchanged with the ticket purchase API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::order::OrderDraft;

/// Body of `POST <API_URL>`.
///
/// Field names are the PascalCase renames of [`OrderDraft`]'s fields; string
/// values are sent exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseRequest {
    pub concert_id: u32,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub quantity: u32,
    pub credit_card: String,
    pub expiration: String,
    pub security_code: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
}

impl PurchaseRequest {
    /// Builds the request body from a draft that passed validation. Returns
    /// `None` if the quantity is not a whole number.
    pub fn from_draft(draft: &OrderDraft) -> Option<Self> {
        Some(Self {
            concert_id: draft.concert_id,
            email: draft.email.clone(),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            quantity: draft.quantity()?,
            credit_card: draft.credit_card.clone(),
            expiration: draft.expiration.clone(),
            security_code: draft.security_code.clone(),
            address: draft.address.clone(),
            city: draft.city.clone(),
            province: draft.province.clone(),
            postal_code: draft.postal_code.clone(),
            country: draft.country.clone(),
        })
    }
}

/// Error body returned by the API on a non-2xx response (validation problem
/// details). Unknown members are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(default)]
    pub title: Option<String>,
    /// Messages per API field name, e.g. `{"Email": ["Invalid"]}`.
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}
