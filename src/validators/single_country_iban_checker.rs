use crate::outcome::{InvalidReason, ValidationOutcome};
use crate::validators::iban_checker::{normalize_iban, IbanChecker};
use crate::validators::Validator;

/// IBAN restricted to a single country with a fixed BBAN layout:
/// `bank_code_len` letters followed by `account_len` alphanumeric characters.
///
/// Country, length and BBAN layout are checked first, then the value goes through
/// [IbanChecker].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleCountryIbanChecker {
    pub country: &'static str,
    pub bank_code_len: usize,
    pub account_len: usize,
}

/// `RO` + 2 check digits + 4-letter bank code + 16 alphanumerics.
pub const ROMANIAN_IBAN: SingleCountryIbanChecker = SingleCountryIbanChecker {
    country: "RO",
    bank_code_len: 4,
    account_len: 16,
};

impl SingleCountryIbanChecker {
    pub fn total_len(&self) -> usize {
        self.country.len() + 2 + self.bank_code_len + self.account_len
    }

    fn has_bban_structure(&self, iban: &str) -> bool {
        let bytes = iban.as_bytes();
        let bank_code_start = self.country.len() + 2;
        let account_start = bank_code_start + self.bank_code_len;

        bytes[self.country.len()..bank_code_start]
            .iter()
            .all(u8::is_ascii_digit)
            && bytes[bank_code_start..account_start]
                .iter()
                .all(u8::is_ascii_uppercase)
            && bytes[account_start..]
                .iter()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }

    fn check(&self, iban: &str) -> Result<(), InvalidReason> {
        if !iban.starts_with(self.country) {
            return Err(InvalidReason::UnexpectedCountry);
        }
        if iban.chars().count() != self.total_len() {
            return Err(InvalidReason::WrongLength);
        }
        if !self.has_bban_structure(iban) {
            return Err(InvalidReason::InvalidFormat);
        }
        IbanChecker.check(iban)
    }
}

impl Default for SingleCountryIbanChecker {
    fn default() -> Self {
        ROMANIAN_IBAN
    }
}

impl Validator for SingleCountryIbanChecker {
    fn validate(&self, input: &str) -> ValidationOutcome {
        let iban = normalize_iban(input);
        if iban.is_empty() {
            return ValidationOutcome::Valid;
        }
        self.check(&iban).into()
    }
}
