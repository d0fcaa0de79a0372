// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod family;
mod form;
mod observability;
mod outcome;
mod stats;
mod validators;

// This is the public API of the identifier validation library
pub use family::{validate, ValidatorFamily};
pub use form::config::FieldConfig;
pub use form::error::CreateFormValidatorError;
pub use form::{FieldOutcome, FormReport, FormValidator, FormValidatorBuilder, FormValues};
pub use observability::labels::Labels;
pub use outcome::{InvalidReason, ValidationOutcome};
pub use validators::{
    expand_and_mod, is_valid_iban_length, weighted_mod_11_check_digit, IbanChecker,
    PhoneNumberFormat, RomanianFiscalCodeChecksum, RomanianPersonalNumericCode,
    SingleCountryIbanChecker, Validator, VinFormat, FALLBACK_IBAN_LENGTH, IBAN_LENGTHS,
    ROMANIAN_IBAN,
};
