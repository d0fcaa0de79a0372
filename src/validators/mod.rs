mod checksum;
mod iban_checker;
mod iban_lengths;
mod phone_number_format;
mod romanian_fiscal_code_checksum;
mod romanian_personal_numeric_code;
mod single_country_iban_checker;
mod vin_format;

use crate::family::ValidatorFamily;
use crate::outcome::ValidationOutcome;
pub use crate::validators::checksum::{expand_and_mod, weighted_mod_11_check_digit};
pub use crate::validators::iban_checker::IbanChecker;
pub use crate::validators::iban_lengths::{
    is_valid_iban_length, FALLBACK_IBAN_LENGTH, IBAN_LENGTHS,
};
pub use crate::validators::phone_number_format::PhoneNumberFormat;
pub use crate::validators::romanian_fiscal_code_checksum::RomanianFiscalCodeChecksum;
pub use crate::validators::romanian_personal_numeric_code::RomanianPersonalNumericCode;
pub use crate::validators::single_country_iban_checker::{
    SingleCountryIbanChecker, ROMANIAN_IBAN,
};
pub use crate::validators::vin_format::VinFormat;

/// A pure check of a raw form value. Implementations never panic and keep no state,
/// so the same input always yields the same outcome.
pub trait Validator: Send + Sync {
    fn validate(&self, input: &str) -> ValidationOutcome;

    fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_valid()
    }
}

impl Validator for ValidatorFamily {
    fn validate(&self, input: &str) -> ValidationOutcome {
        match self {
            ValidatorFamily::PersonalId => RomanianPersonalNumericCode.validate(input),
            ValidatorFamily::BankAccountGeneric => IbanChecker.validate(input),
            ValidatorFamily::BankAccountSingleCountry => ROMANIAN_IBAN.validate(input),
            ValidatorFamily::FiscalCode => RomanianFiscalCodeChecksum.validate(input),
            ValidatorFamily::Vin => VinFormat.validate(input),
            ValidatorFamily::PhoneNumber => PhoneNumberFormat.validate(input),
        }
    }
}
