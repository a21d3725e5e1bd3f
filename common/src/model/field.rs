use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An editable field of the checkout form.
///
/// The serialized form (and [`Field::name`]) is the camelCase name used as the
/// HTML `name`/`id` attribute, e.g. `creditCard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    Name,
    Phone,
    Quantity,
    CreditCard,
    Expiration,
    SecurityCode,
    Address,
    City,
    Province,
    PostalCode,
    Country,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl Field {
    /// Every field, in the order the validator checks them.
    pub const ALL: [Field; 12] = [
        Field::Email,
        Field::Name,
        Field::Phone,
        Field::Quantity,
        Field::CreditCard,
        Field::Expiration,
        Field::SecurityCode,
        Field::Address,
        Field::City,
        Field::Province,
        Field::PostalCode,
        Field::Country,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Quantity => "quantity",
            Field::CreditCard => "creditCard",
            Field::Expiration => "expiration",
            Field::SecurityCode => "securityCode",
            Field::Address => "address",
            Field::City => "city",
            Field::Province => "province",
            Field::PostalCode => "postalCode",
            Field::Country => "country",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Name => "Full Name",
            Field::Phone => "Phone Number",
            Field::Quantity => "Number of Tickets",
            Field::CreditCard => "Credit Card Number",
            Field::Expiration => "Expiration (MM/YY)",
            Field::SecurityCode => "Security Code",
            Field::Address => "Street Address",
            Field::City => "City",
            Field::Province => "Province/State",
            Field::PostalCode => "Postal Code",
            Field::Country => "Country",
        }
    }

    /// HTML input type used to render the field.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Phone => "tel",
            Field::Quantity => "number",
            _ => "text",
        }
    }

    /// Maximum length in characters, where the field is bounded.
    pub fn max_length(self) -> Option<usize> {
        match self {
            Field::Name | Field::Address => Some(200),
            Field::City => Some(80),
            Field::Country => Some(60),
            _ => None,
        }
    }

    /// Key under which the purchase API reports errors for this field once
    /// lower-cased (`CreditCard` -> `creditcard`).
    pub fn server_key(self) -> String {
        self.name().to_lowercase()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "ConcertId".parse::<Field>(),
            Err(UnknownField("ConcertId".to_string()))
        );
    }

    #[test]
    fn serde_uses_form_names() {
        assert_eq!(
            serde_json::to_string(&Field::SecurityCode).unwrap(),
            "\"securityCode\""
        );
    }

    #[test]
    fn server_key_is_lower_case() {
        assert_eq!(Field::CreditCard.server_key(), "creditcard");
        assert_eq!(Field::Email.server_key(), "email");
    }
}
