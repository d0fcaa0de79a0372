use crate::family::ValidatorFamily;
use crate::observability::labels::Labels;
use crate::outcome::ValidationOutcome;
use metrics::{counter, Counter};

pub struct Metrics {
    labels: Labels,
    pub validations: Counter,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            labels: labels.clone(),
            validations: counter!("form.validations", labels.clone()),
        }
    }

    pub fn record_field_outcome(&self, family: ValidatorFamily, outcome: &ValidationOutcome) {
        counter!(
            "form.field_outcomes",
            self.labels.for_field_outcome(family, outcome)
        )
        .increment(1);
    }
}
