use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Why a value was rejected. Mapping a reason to user-facing copy is left to the caller.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Error,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum InvalidReason {
    #[error("A value is required")]
    Required,

    #[error("The value does not have the expected length")]
    WrongLength,

    #[error("The value must only contain decimal digits")]
    NonNumeric,

    #[error("The first digit is not a valid sex/century category")]
    InvalidCategory,

    #[error("The check digits do not match")]
    BadChecksum,

    #[error("The value does not match the expected structure")]
    InvalidFormat,

    #[error("The value contains characters that are not allowed")]
    InvalidCharacters,

    #[error("The value must start with 0")]
    MustStartWithZero,

    #[error("The value is issued for another country")]
    UnexpectedCountry,
}

/// Verdict of a single validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason")]
pub enum ValidationOutcome {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The failure reason, `None` when the value is valid.
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(reason) => Some(*reason),
        }
    }

    /// Static name used as a metric label value.
    pub fn label(&self) -> &'static str {
        match self {
            ValidationOutcome::Valid => "valid",
            ValidationOutcome::Invalid(reason) => reason.into(),
        }
    }

    pub fn into_result(self) -> Result<(), InvalidReason> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(reason) => Err(reason),
        }
    }
}

impl From<Result<(), InvalidReason>> for ValidationOutcome {
    fn from(result: Result<(), InvalidReason>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::Valid,
            Err(reason) => ValidationOutcome::Invalid(reason),
        }
    }
}
