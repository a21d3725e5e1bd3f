//! Client-side validation of the checkout form.
//!
//! Each field has its own rule; [`validate`] runs all of them and collects the
//! failures into a [`FieldErrors`] map. Rules never depend on one another.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::field::Field;
use crate::model::order::OrderDraft;

/// Validation failures keyed by field. Empty when the draft can be submitted.
pub type FieldErrors = BTreeMap<Field, String>;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid hardcoded regex"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s./0-9]*$").expect("valid hardcoded regex")
});

static EXPIRATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])(/|-)?([0-9]{2}|[0-9]{4})$").expect("valid hardcoded regex")
});

static SECURITY_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("valid hardcoded regex"));

type Rule = Result<(), &'static str>;

fn required(value: &str, message: &'static str) -> Rule {
    if value.is_empty() { Err(message) } else { Ok(()) }
}

fn bounded(value: &str, max: usize, message: &'static str) -> Rule {
    if value.chars().count() > max { Err(message) } else { Ok(()) }
}

pub fn validate_email(value: &str) -> Rule {
    required(value, "Email is required")?;
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err("Invalid email address")
    }
}

pub fn validate_name(value: &str) -> Rule {
    required(value, "Name is required")?;
    bounded(value, 200, "Name must be less than 200 characters")
}

pub fn validate_phone(value: &str) -> Rule {
    required(value, "Phone number is required")?;
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err("Invalid phone number")
    }
}

pub fn validate_quantity(value: &str) -> Rule {
    match value.trim().parse::<u32>() {
        Ok(quantity) if quantity >= 1 => Ok(()),
        _ => Err("Quantity must be at least 1"),
    }
}

/// Accepts 13 to 19 digits once spaces, dashes and any other separators are
/// stripped.
pub fn validate_credit_card(value: &str) -> Rule {
    required(value, "Credit card number is required")?;
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if (13..=19).contains(&digits) {
        Ok(())
    } else {
        Err("Invalid credit card number")
    }
}

/// Accepts `MM/YY`, `MM-YY`, `MMYY` and their four-digit-year forms.
pub fn validate_expiration(value: &str) -> Rule {
    required(value, "Expiration date is required")?;
    if EXPIRATION_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err("Expiration must be in MM/YY or MM/YYYY format")
    }
}

pub fn validate_security_code(value: &str) -> Rule {
    required(value, "Security code is required")?;
    if SECURITY_CODE_RE.is_match(value) {
        Ok(())
    } else {
        Err("3-4 digit security code required")
    }
}

pub fn validate_address(value: &str) -> Rule {
    required(value, "Address is required")?;
    bounded(value, 200, "Address must be less than 200 characters")
}

pub fn validate_city(value: &str) -> Rule {
    required(value, "City is required")?;
    bounded(value, 80, "City must be less than 80 characters")
}

pub fn validate_province(value: &str) -> Rule {
    required(value, "Province is required")
}

pub fn validate_postal_code(value: &str) -> Rule {
    required(value, "Postal code is required")
}

pub fn validate_country(value: &str) -> Rule {
    required(value, "Country is required")?;
    bounded(value, 60, "Country must be less than 60 characters")
}

/// Checks a single field of the draft.
pub fn validate_field(draft: &OrderDraft, field: Field) -> Rule {
    let value = draft.get(field);
    match field {
        Field::Email => validate_email(value),
        Field::Name => validate_name(value),
        Field::Phone => validate_phone(value),
        Field::Quantity => validate_quantity(value),
        Field::CreditCard => validate_credit_card(value),
        Field::Expiration => validate_expiration(value),
        Field::SecurityCode => validate_security_code(value),
        Field::Address => validate_address(value),
        Field::City => validate_city(value),
        Field::Province => validate_province(value),
        Field::PostalCode => validate_postal_code(value),
        Field::Country => validate_country(value),
    }
}

/// Validates every field of the draft.
pub fn validate(draft: &OrderDraft) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(draft, field)
                .err()
                .map(|message| (field, message.to_string()))
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn valid_draft() -> OrderDraft {
    OrderDraft {
        concert_id: 2,
        email: "fan@example.com".to_string(),
        name: "Ana Souza".to_string(),
        phone: "+1 555 123-4567".to_string(),
        quantity: "3".to_string(),
        credit_card: "4111 1111 1111 1111".to_string(),
        expiration: "12/27".to_string(),
        security_code: "123".to_string(),
        address: "1 Main Street".to_string(),
        city: "Toronto".to_string(),
        province: "ON".to_string(),
        postal_code: "M5V 2T6".to_string(),
        country: "Canada".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn blank_draft_reports_every_required_field() {
        let errors = validate(&OrderDraft::default());
        let missing: Vec<Field> = errors.keys().copied().collect();
        let expected: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| *field != Field::Quantity)
            .collect();
        assert_eq!(missing, expected);
        assert_eq!(errors[&Field::Email], "Email is required");
        assert_eq!(errors[&Field::PostalCode], "Postal code is required");
    }

    #[test]
    fn each_missing_field_is_reported_alone() {
        for field in Field::ALL {
            let mut draft = valid_draft();
            draft.set(field, String::new());
            let errors = validate(&draft);
            assert_eq!(errors.len(), 1, "{field}");
            assert!(errors.contains_key(&field), "{field}");
        }
    }

    #[test]
    fn email_shape() {
        assert_eq!(validate_email("a@b.co"), Ok(()));
        assert_eq!(validate_email("a@b"), Err("Invalid email address"));
        assert_eq!(validate_email("plain"), Err("Invalid email address"));
        assert_eq!(validate_email(""), Err("Email is required"));
    }

    #[test]
    fn name_length_bound() {
        assert_eq!(validate_name(&"x".repeat(200)), Ok(()));
        assert_eq!(
            validate_name(&"x".repeat(201)),
            Err("Name must be less than 200 characters")
        );
    }

    #[test]
    fn phone_patterns() {
        assert_eq!(validate_phone("+55 (11) 91234-5678"), Err("Invalid phone number"));
        assert_eq!(validate_phone("+(55)11 91234-5678"), Ok(()));
        assert_eq!(validate_phone("555.123.4567"), Ok(()));
        assert_eq!(validate_phone("(416)555-0199"), Ok(()));
        assert_eq!(validate_phone("+1 555 123-4567"), Ok(()));
        assert_eq!(validate_phone("+1 (555) 123-4567"), Err("Invalid phone number"));
        assert_eq!(validate_phone("call me"), Err("Invalid phone number"));
    }

    #[test]
    fn quantity_must_be_positive_integer() {
        assert_eq!(validate_quantity("1"), Ok(()));
        assert_eq!(validate_quantity("12"), Ok(()));
        for bad in ["", "0", "-2", "1.5", "two"] {
            assert_eq!(validate_quantity(bad), Err("Quantity must be at least 1"), "{bad}");
        }
    }

    #[test]
    fn credit_card_ignores_separators() {
        assert_eq!(validate_credit_card("4111-1111-1111-1111"), Ok(()));
        assert_eq!(validate_credit_card("4111111111111"), Ok(()));
        assert_eq!(validate_credit_card("4111 1111 1111 1111 123"), Ok(()));
        assert_eq!(
            validate_credit_card("4111 1111 1111"),
            Err("Invalid credit card number")
        );
        assert_eq!(
            validate_credit_card("41111111111111111111"),
            Err("Invalid credit card number")
        );
    }

    #[quickcheck]
    fn credit_card_length_decides(digits: Vec<u8>) -> TestResult {
        if digits.is_empty() {
            return TestResult::discard();
        }
        let mut card = String::new();
        for (i, digit) in digits.iter().enumerate() {
            card.push(char::from(b'0' + digit % 10));
            if i % 4 == 3 {
                card.push(if digit % 2 == 0 { ' ' } else { '-' });
            }
        }
        let accepted = validate_credit_card(&card).is_ok();
        TestResult::from_bool(accepted == (13..=19).contains(&digits.len()))
    }

    #[test]
    fn expiration_formats() {
        for good in ["01/25", "12/2025", "0125", "06-27", " 09/29 "] {
            assert_eq!(validate_expiration(good), Ok(()), "{good}");
        }
        for bad in ["13/25", "00/25", "1/25", "01/253", "01.25"] {
            assert_eq!(
                validate_expiration(bad),
                Err("Expiration must be in MM/YY or MM/YYYY format"),
                "{bad}"
            );
        }
    }

    #[test]
    fn security_code_digits() {
        assert_eq!(validate_security_code("123"), Ok(()));
        assert_eq!(validate_security_code("1234"), Ok(()));
        assert_eq!(
            validate_security_code("12"),
            Err("3-4 digit security code required")
        );
        assert_eq!(
            validate_security_code("12a"),
            Err("3-4 digit security code required")
        );
    }

    #[test]
    fn address_city_country_bounds() {
        assert!(validate_address(&"a".repeat(201)).is_err());
        assert_eq!(validate_city(&"c".repeat(80)), Ok(()));
        assert_eq!(
            validate_city(&"c".repeat(81)),
            Err("City must be less than 80 characters")
        );
        assert_eq!(
            validate_country(&"c".repeat(61)),
            Err("Country must be less than 60 characters")
        );
    }

    #[test]
    fn province_and_postal_code_only_required() {
        assert_eq!(validate_province(&"p".repeat(500)), Ok(()));
        assert_eq!(validate_postal_code("anything"), Ok(()));
    }
}
