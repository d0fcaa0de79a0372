use crate::outcome::{InvalidReason, ValidationOutcome};
use crate::validators::checksum::{ascii_digits, weighted_mod_11_check_digit};
use crate::validators::Validator;

/// Fiscal registration code (CUI/CIF), optionally prefixed with a country code such as `RO`.
pub struct RomanianFiscalCodeChecksum;

const CHECKSUM_WEIGHTS: &[u32] = &[7, 5, 3, 2, 1, 7, 5, 3, 2];
const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 10;

/// Drops a leading two-letter country prefix, if any.
fn strip_country_prefix(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
            chars.as_str()
        }
        _ => value,
    }
}

impl RomanianFiscalCodeChecksum {
    fn check(&self, code: &str) -> Result<(), InvalidReason> {
        let digits = ascii_digits(code).ok_or(InvalidReason::InvalidFormat)?;
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&digits.len()) {
            return Err(InvalidReason::InvalidFormat);
        }

        let (base, check_digit) = digits.split_at(digits.len() - 1);

        // left-pad the base with zeros up to the number of weights
        let mut padded = vec![0; CHECKSUM_WEIGHTS.len() - base.len()];
        padded.extend_from_slice(base);

        if weighted_mod_11_check_digit(&padded, CHECKSUM_WEIGHTS) != check_digit[0] {
            return Err(InvalidReason::BadChecksum);
        }
        Ok(())
    }
}

impl Validator for RomanianFiscalCodeChecksum {
    fn validate(&self, input: &str) -> ValidationOutcome {
        let upper = input.trim().to_ascii_uppercase();
        if upper.is_empty() {
            return ValidationOutcome::Valid;
        }
        let code: String = strip_country_prefix(&upper)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        self.check(&code).into()
    }
}
