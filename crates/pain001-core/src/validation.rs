//! # Strict Input Validation
//!
//! Opt-in checks for builder inputs. The permissive builder path never
//! calls into this module; [`crate::Pain001Generator::try_new`] and
//! [`crate::Pain001Generator::try_add_transaction`] do.
//!
//! The rules catch the mistakes banks reject most often (IBAN checksum,
//! BIC shape, lowercase codes, non-positive amounts). They are not a
//! substitute for XSD validation.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::input::{is_blank, Initialization, Receiver, Transaction};

/// `Max35Text` limit for ids.
pub const MAX_ID_LEN: usize = 35;

/// `Max70Text` limit for names and street names.
pub const MAX_NAME_LEN: usize = 70;

/// Fractional digits accepted for instructed amounts.
pub const MAX_AMOUNT_SCALE: u32 = 2;

const IBAN_MIN_LEN: usize = 15;
const IBAN_MAX_LEN: usize = 34;

/// Check everything [`crate::Pain001Generator::new`] consumes.
pub fn validate_initialization(init: &Initialization) -> Result<(), ValidationError> {
    validate_text("unique_document_id", &init.unique_document_id, MAX_ID_LEN)?;
    validate_text("sender_party_name", &init.sender_party_name, MAX_NAME_LEN)?;
    validate_iban("sender_iban", &init.sender_iban)?;
    if let Some(bic) = init.sender_bic.as_deref() {
        if !is_blank(bic) {
            validate_bic(bic)?;
        }
    }
    Ok(())
}

/// Check a payee before it is turned into a `Cdtr` block.
pub fn validate_receiver(receiver: &Receiver) -> Result<(), ValidationError> {
    validate_text("receiver.name", &receiver.name, MAX_NAME_LEN)?;
    validate_text("receiver.street_name", &receiver.street_name, MAX_NAME_LEN)?;
    validate_text("receiver.zip", &receiver.zip, 16)?;
    validate_text("receiver.city", &receiver.city, 35)?;
    validate_country(&receiver.country_code)
}

/// Check the amount, currency and routing of a transfer.
pub fn validate_transaction(transaction: &Transaction) -> Result<(), ValidationError> {
    validate_text(
        "transaction.reference_identification",
        &transaction.reference_identification,
        MAX_ID_LEN,
    )?;
    validate_currency(&transaction.currency_code)?;
    validate_amount(transaction.amount)?;
    validate_iban("transaction.receiver_iban", &transaction.receiver_iban)
}

/// Non-blank and at most `max` characters.
pub fn validate_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::Blank { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field,
            max,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// ISO 13616 IBAN: country letters, check digits, mod-97 remainder of 1.
///
/// Input must already be in electronic form (no spaces, uppercase).
pub fn validate_iban(field: &'static str, iban: &str) -> Result<(), ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidIban { field, reason };

    if iban.len() < IBAN_MIN_LEN || iban.len() > IBAN_MAX_LEN {
        return Err(invalid(format!(
            "length must be {IBAN_MIN_LEN}..={IBAN_MAX_LEN}, got {}",
            iban.len()
        )));
    }
    if !iban
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    {
        return Err(invalid(
            "only digits and uppercase letters are allowed".to_string(),
        ));
    }
    let bytes = iban.as_bytes();
    if !bytes[..2].iter().all(u8::is_ascii_uppercase) {
        return Err(invalid("must start with a country code".to_string()));
    }
    if !bytes[2..4].iter().all(u8::is_ascii_digit) {
        return Err(invalid("check digits must be numeric".to_string()));
    }

    let remainder = iban[4..]
        .chars()
        .chain(iban[..4].chars())
        .fold(0u32, |acc, c| match c.to_digit(36) {
            Some(v) if v >= 10 => (acc * 100 + v) % 97,
            Some(v) => (acc * 10 + v) % 97,
            None => acc,
        });
    if remainder != 1 {
        return Err(invalid(format!("checksum mismatch (remainder {remainder})")));
    }
    Ok(())
}

/// ISO 9362 BIC: 8 or 11 alphanumeric characters, the first six letters.
pub fn validate_bic(bic: &str) -> Result<(), ValidationError> {
    if bic.len() != 8 && bic.len() != 11 {
        return Err(ValidationError::InvalidBic(format!(
            "BIC must be 8 or 11 characters, got {}",
            bic.len()
        )));
    }
    if !bic
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    {
        return Err(ValidationError::InvalidBic(format!(
            "BIC must be uppercase alphanumeric: {bic}"
        )));
    }
    if !bic[..6].chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidBic(format!(
            "BIC bank and country code must be letters: {bic}"
        )));
    }
    Ok(())
}

/// Three uppercase ASCII letters.
pub fn validate_currency(code: &str) -> Result<(), ValidationError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCurrency(code.to_string()))
    }
}

/// Two uppercase ASCII letters.
pub fn validate_country(code: &str) -> Result<(), ValidationError> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCountry(code.to_string()))
    }
}

/// Strictly positive with at most [`MAX_AMOUNT_SCALE`] fractional digits.
pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount(format!(
            "amount must be positive, got {amount}"
        )));
    }
    if amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(ValidationError::InvalidAmount(format!(
            "at most {MAX_AMOUNT_SCALE} decimal places allowed, got {amount}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn accepts_known_good_ibans() {
        for iban in [
            "CH9300762011623852957",
            "CH5604835012345678009",
            "DE89370400440532013000",
        ] {
            assert!(validate_iban("iban", iban).is_ok(), "{iban}");
        }
    }

    #[test]
    fn rejects_iban_checksum_mismatch() {
        let err = validate_iban("iban", "CH9300762011623852958").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidIban { field: "iban", .. }));
    }

    #[test]
    fn rejects_malformed_ibans() {
        for iban in [
            "CH0000",
            "ch9300762011623852957",
            "CH93 0076 2011 6238 5295 7",
            "9300762011623852957CH",
            "CHAB00762011623852957",
        ] {
            assert!(validate_iban("iban", iban).is_err(), "{iban}");
        }
    }

    #[test]
    fn bic_rules() {
        assert!(validate_bic("UBSWCHZH").is_ok());
        assert!(validate_bic("UBSWCHZH80A").is_ok());
        assert!(matches!(
            validate_bic("ABC"),
            Err(ValidationError::InvalidBic(_))
        ));
        assert!(validate_bic("ubswchzh").is_err());
        assert!(validate_bic("UBS1CHZH").is_err());
        assert!(validate_bic("UBSW@HZH").is_err());
    }

    #[test]
    fn currency_and_country_codes() {
        assert!(validate_currency("CHF").is_ok());
        assert!(validate_currency("chf").is_err());
        assert!(validate_currency("CHFX").is_err());
        assert!(validate_country("CH").is_ok());
        assert!(validate_country("CHE").is_err());
        assert!(validate_country("").is_err());
    }

    #[test]
    fn amount_rules() {
        assert!(validate_amount(dec("100.00")).is_ok());
        assert!(validate_amount(dec("0.01")).is_ok());
        assert!(validate_amount(dec("1.500")).is_ok());
        assert!(validate_amount(dec("0")).is_err());
        assert!(validate_amount(dec("-1")).is_err());
        assert!(validate_amount(dec("1.005")).is_err());
    }

    #[test]
    fn text_rules() {
        assert_eq!(
            validate_text("name", "  ", 70),
            Err(ValidationError::Blank { field: "name" })
        );
        let long = "x".repeat(36);
        assert!(matches!(
            validate_text("id", &long, MAX_ID_LEN),
            Err(ValidationError::TooLong { max: 35, .. })
        ));
        assert!(validate_text("id", "MSG1", MAX_ID_LEN).is_ok());
    }

    #[test]
    fn blank_bic_is_not_validated() {
        let init = Initialization {
            unique_document_id: "MSG1".to_string(),
            sender_party_name: "ACME GmbH".to_string(),
            sender_iban: "CH9300762011623852957".to_string(),
            execution_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            sender_bic: Some(" ".to_string()),
        };
        assert!(validate_initialization(&init).is_ok());
    }

    #[test]
    fn receiver_requires_country_code() {
        let receiver = Receiver {
            name: "Jane Doe".to_string(),
            street_name: "Main St".to_string(),
            street_number: None,
            zip: "8000".to_string(),
            city: "Zurich".to_string(),
            country_code: "Switzerland".to_string(),
        };
        assert_eq!(
            validate_receiver(&receiver),
            Err(ValidationError::InvalidCountry("Switzerland".to_string()))
        );
    }
}
