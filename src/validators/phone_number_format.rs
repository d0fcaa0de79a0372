use crate::outcome::{InvalidReason, ValidationOutcome};
use crate::validators::Validator;
use std::ops::RangeInclusive;

/// National phone number: digits only, leading 0, 8 to 11 digits.
pub struct PhoneNumberFormat;

const PHONE_NUMBER_LENGTH: RangeInclusive<usize> = 8..=11;

impl PhoneNumberFormat {
    // The first failing check wins, in this order.
    fn check(&self, phone: &str) -> Result<(), InvalidReason> {
        if phone.is_empty() {
            return Err(InvalidReason::Required);
        }
        if !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidReason::InvalidCharacters);
        }
        if !phone.starts_with('0') {
            return Err(InvalidReason::MustStartWithZero);
        }
        if !PHONE_NUMBER_LENGTH.contains(&phone.len()) {
            return Err(InvalidReason::WrongLength);
        }
        Ok(())
    }
}

impl Validator for PhoneNumberFormat {
    fn validate(&self, input: &str) -> ValidationOutcome {
        self.check(input.trim()).into()
    }
}
