use crate::outcome::{InvalidReason, ValidationOutcome};
use crate::validators::checksum::{ascii_digits, weighted_mod_11_check_digit};
use crate::validators::Validator;

/// 13-digit personal numeric code (CNP).
pub struct RomanianPersonalNumericCode;

const CNP_LENGTH: usize = 13;
const CHECKSUM_WEIGHTS: &[u32] = &[2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

impl RomanianPersonalNumericCode {
    fn check(&self, cnp: &str) -> Result<(), InvalidReason> {
        if cnp.chars().count() != CNP_LENGTH {
            return Err(InvalidReason::WrongLength);
        }
        let digits = ascii_digits(cnp).ok_or(InvalidReason::NonNumeric)?;

        // first digit encodes sex and century, 1 through 9
        if digits[0] == 0 {
            return Err(InvalidReason::InvalidCategory);
        }

        let (payload, check_digit) = digits.split_at(CHECKSUM_WEIGHTS.len());
        if weighted_mod_11_check_digit(payload, CHECKSUM_WEIGHTS) != check_digit[0] {
            return Err(InvalidReason::BadChecksum);
        }
        Ok(())
    }
}

impl Validator for RomanianPersonalNumericCode {
    fn validate(&self, input: &str) -> ValidationOutcome {
        let cnp = input.trim();
        if cnp.is_empty() {
            return ValidationOutcome::Valid;
        }
        self.check(cnp).into()
    }
}
