use crate::family::ValidatorFamily;
use crate::outcome::ValidationOutcome;
use metrics::{IntoLabels, Label, SharedString};

const FAMILY: &str = "family";
const OUTCOME: &str = "outcome";

/// Metric labels attached to everything a [FormValidator](crate::FormValidator) reports,
/// e.g. `[("form", "refund")]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// The form labels followed by `family` and `outcome` for one validated field.
    pub(crate) fn for_field_outcome(
        &self,
        family: ValidatorFamily,
        outcome: &ValidationOutcome,
    ) -> Labels {
        let mut labels = Vec::with_capacity(self.0.len() + 2);
        labels.extend(self.0.iter().cloned());
        labels.push(Label::new(FAMILY, family.name()));
        labels.push(Label::new(OUTCOME, outcome.label()));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
