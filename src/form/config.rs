use crate::family::ValidatorFamily;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

/// One form field and the identifier family its value must satisfy.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub name: String,
    pub validator: ValidatorFamily,
    /// An empty value is reported as `Required` instead of going through the validator.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub required: bool,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, validator: ValidatorFamily) -> Self {
        Self {
            name: name.into(),
            validator,
            required: false,
        }
    }

    pub fn name(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.mutate_clone(|x| x.name = name)
    }

    pub fn validator(&self, validator: ValidatorFamily) -> Self {
        self.mutate_clone(|x| x.validator = validator)
    }

    pub fn required(&self, required: bool) -> Self {
        self.mutate_clone(|x| x.required = required)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
