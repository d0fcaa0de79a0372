use crate::outcome::{InvalidReason, ValidationOutcome};
use crate::validators::checksum::expand_and_mod;
use crate::validators::iban_lengths::is_valid_iban_length;
use crate::validators::Validator;

/// IBAN for any country: structure, country-dependent length and the ISO 7064 MOD 97-10 check.
pub struct IbanChecker;

/// Removes all whitespace and upper-cases ASCII letters.
pub(crate) fn normalize_iban(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Two letters, two digits, then at least one alphanumeric character.
fn has_iban_structure(iban: &str) -> bool {
    let bytes = iban.as_bytes();
    bytes.len() > 4
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Moves the country code and check digits to the end and folds modulo 97.
pub(crate) fn has_valid_iban_checksum(iban: &str) -> bool {
    let (head, tail) = iban.split_at(4);
    let rearranged = format!("{tail}{head}");
    expand_and_mod(&rearranged, 97) == Some(1)
}

impl IbanChecker {
    /// Checks an already normalized, non-empty IBAN.
    pub(crate) fn check(&self, iban: &str) -> Result<(), InvalidReason> {
        if !has_iban_structure(iban) {
            return Err(InvalidReason::InvalidFormat);
        }
        // the structure check guarantees ASCII, so byte length is the character count
        if !is_valid_iban_length(&iban[..2], iban.len()) {
            return Err(InvalidReason::WrongLength);
        }
        if !has_valid_iban_checksum(iban) {
            return Err(InvalidReason::BadChecksum);
        }
        Ok(())
    }
}

impl Validator for IbanChecker {
    fn validate(&self, input: &str) -> ValidationOutcome {
        let iban = normalize_iban(input);
        if iban.is_empty() {
            return ValidationOutcome::Valid;
        }
        self.check(&iban).into()
    }
}
