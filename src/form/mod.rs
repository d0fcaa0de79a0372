pub mod config;
pub mod error;
mod metrics;

use crate::family::ValidatorFamily;
use crate::form::config::FieldConfig;
use crate::form::error::CreateFormValidatorError;
use crate::form::metrics::Metrics;
use crate::observability::labels::Labels;
use crate::outcome::{InvalidReason, ValidationOutcome};
use crate::stats::GLOBAL_STATS;
use crate::validators::Validator;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Source of raw field values for a [FormValidator].
pub trait FormValues {
    /// The raw value of the field `name`, `None` if the form doesn't contain it.
    fn field_value(&self, name: &str) -> Option<&str>;
}

impl FormValues for BTreeMap<String, String> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FormValues for HashMap<String, String> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub name: String,
    pub validator: ValidatorFamily,
    pub outcome: ValidationOutcome,
}

/// Per-field verdicts, in the order the fields were configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub fields: Vec<FieldOutcome>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|field| field.outcome.is_valid())
    }

    pub fn outcome(&self, name: &str) -> Option<ValidationOutcome> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.outcome)
    }

    /// Names and reasons of every rejected field
    pub fn invalid_fields(&self) -> impl Iterator<Item = (&str, InvalidReason)> {
        self.fields
            .iter()
            .filter_map(|field| Some((field.name.as_str(), field.outcome.reason()?)))
    }
}

pub struct FormValidatorBuilder<'a> {
    fields: &'a [FieldConfig],
    labels: Labels,
}

impl FormValidatorBuilder<'_> {
    pub fn new(fields: &[FieldConfig]) -> FormValidatorBuilder<'_> {
        FormValidatorBuilder {
            fields,
            labels: Labels::default(),
        }
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> Result<FormValidator, CreateFormValidatorError> {
        let mut seen = HashSet::new();
        for field in self.fields {
            if field.name.trim().is_empty() {
                return Err(CreateFormValidatorError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(CreateFormValidatorError::DuplicateField(field.name.clone()));
            }
        }

        {
            let stats = &*GLOBAL_STATS;
            stats.form_validator_creations.increment(1);
            stats
                .number_of_fields_per_form
                .record(self.fields.len() as f64);
        }

        Ok(FormValidator {
            fields: self.fields.to_vec(),
            metrics: Metrics::new(&self.labels),
        })
    }
}

/// Validates every configured field of a submitted form.
pub struct FormValidator {
    fields: Vec<FieldConfig>,
    metrics: Metrics,
}

impl FormValidator {
    pub fn builder(fields: &[FieldConfig]) -> FormValidatorBuilder<'_> {
        FormValidatorBuilder::new(fields)
    }

    /// The configured fields, in validation order.
    pub fn fields(&self) -> &[FieldConfig] {
        &self.fields
    }

    /// Validates one field. A missing value is treated as the empty string.
    pub fn validate_field(field: &FieldConfig, value: Option<&str>) -> ValidationOutcome {
        let value = value.unwrap_or_default();
        if field.required && value.trim().is_empty() {
            return ValidationOutcome::Invalid(InvalidReason::Required);
        }
        field.validator.validate(value)
    }

    pub fn validate<V: FormValues>(&self, values: &V) -> FormReport {
        self.metrics.validations.increment(1);

        let fields = self
            .fields
            .iter()
            .map(|field| {
                let outcome = Self::validate_field(field, values.field_value(&field.name));
                self.metrics.record_field_outcome(field.validator, &outcome);
                FieldOutcome {
                    name: field.name.clone(),
                    validator: field.validator,
                    outcome,
                }
            })
            .collect();

        FormReport { fields }
    }
}
