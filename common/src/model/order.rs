use serde::{Deserialize, Serialize};

use crate::model::concert::INITIAL_CONCERT_ID;
use crate::model::field::Field;

/// The order being filled in on the checkout form.
///
/// Every editable value is kept exactly as typed, including `quantity`, so the
/// form can echo the input back unchanged; numeric interpretation happens in
/// [`OrderDraft::quantity`] and in validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub concert_id: u32,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub quantity: String,
    pub credit_card: String,
    pub expiration: String,
    pub security_code: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::for_concert(INITIAL_CONCERT_ID)
    }
}

impl OrderDraft {
    /// A blank draft for the given concert, with a quantity of one ticket.
    pub fn for_concert(concert_id: u32) -> Self {
        Self {
            concert_id,
            email: String::new(),
            name: String::new(),
            phone: String::new(),
            quantity: "1".to_string(),
            credit_card: String::new(),
            expiration: String::new(),
            security_code: String::new(),
            address: String::new(),
            city: String::new(),
            province: String::new(),
            postal_code: String::new(),
            country: String::new(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Quantity => &self.quantity,
            Field::CreditCard => &self.credit_card,
            Field::Expiration => &self.expiration,
            Field::SecurityCode => &self.security_code,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::Province => &self.province,
            Field::PostalCode => &self.postal_code,
            Field::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Quantity => &mut self.quantity,
            Field::CreditCard => &mut self.credit_card,
            Field::Expiration => &mut self.expiration,
            Field::SecurityCode => &mut self.security_code,
            Field::Address => &mut self.address,
            Field::City => &mut self.city,
            Field::Province => &mut self.province,
            Field::PostalCode => &mut self.postal_code,
            Field::Country => &mut self.country,
        };
        *slot = value;
    }

    /// The requested ticket count, if the quantity input holds a whole number.
    pub fn quantity(&self) -> Option<u32> {
        self.quantity.trim().parse().ok()
    }

    /// Clears every field back to its initial value, keeping the concert.
    pub fn reset(&mut self) {
        *self = Self::for_concert(self.concert_id);
    }
}
