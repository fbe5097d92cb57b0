// Start of file: /src/responder/failure.rs

use std::error::Error;

/// One field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// What a handler hands to [`Responder::error`](super::Responder::error).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Failure {
    /// No detail; the default 500 message is used.
    #[default]
    Unspecified,
    /// Free-form text shown as the envelope message.
    Message(String),
    /// Field errors in insertion order; the first one becomes the message.
    FieldValidation(Vec<FieldError>),
    /// The resource does not exist; answered as a 404.
    NotFound,
}

impl Failure {
    pub fn field_validation<I, F, M>(errors: I) -> Self
    where
        I: IntoIterator<Item = (F, M)>,
        F: Into<String>,
        M: Into<String>,
    {
        Self::FieldValidation(
            errors
                .into_iter()
                .map(|(field, message)| FieldError {
                    field: field.into(),
                    message: message.into(),
                })
                .collect(),
        )
    }

    /// Uses the `Display` output of any error as the message.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        Self::Message(err.to_string())
    }

    /// The text that ends up in the envelope, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Failure::Unspecified | Failure::NotFound => None,
            Failure::Message(text) => Some(text.clone()),
            Failure::FieldValidation(errors) => errors.first().map(|error| error.message.clone()),
        }
    }
}

impl From<&str> for Failure {
    fn from(text: &str) -> Self {
        Self::Message(text.to_owned())
    }
}

impl From<String> for Failure {
    fn from(text: String) -> Self {
        Self::Message(text)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(err.to_string())
    }
}

impl From<Vec<FieldError>> for Failure {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::FieldValidation(errors)
    }
}
