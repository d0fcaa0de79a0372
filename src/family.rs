use crate::outcome::ValidationOutcome;
use crate::validators::Validator;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// The kinds of identifiers a form field can be checked against.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum ValidatorFamily {
    /// 13-digit personal numeric code
    PersonalId,
    /// IBAN of any country
    BankAccountGeneric,
    /// Romanian IBAN
    BankAccountSingleCountry,
    /// Fiscal registration code
    FiscalCode,
    Vin,
    PhoneNumber,
}

impl ValidatorFamily {
    /// Static snake_case name, used as a metric label value.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Validates `raw_value` against `family`.
///
/// Total and deterministic: every input, including the empty string, gets a verdict.
/// PhoneNumber reports an empty value as `Required`, every other family accepts it
/// and leaves required-ness to the caller.
pub fn validate(family: ValidatorFamily, raw_value: &str) -> ValidationOutcome {
    family.validate(raw_value)
}
