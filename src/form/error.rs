use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CreateFormValidatorError {
    /// A field was configured without a name
    #[error("Form fields must have a non-empty name")]
    EmptyFieldName,

    /// Two fields share the same name
    #[error("The field `{0}` is configured more than once")]
    DuplicateField(String),
}
