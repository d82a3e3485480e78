// Error types for the Gusset validator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Construction-time rejection: the source carried no decoded body, or
    /// the body is not a key/value map. The message is fixed regardless of
    /// what the body actually was.
    #[error("only parsed bodies in the form of a key/value map are supported")]
    InvalidInput,

    /// An unrecognized criterion name reached the string boundary.
    #[error("invalid validation criterion '{0}'")]
    InvalidArgument(String),

    /// A getter's required check failed because the field is absent.
    #[error("field '{0}' does not exist")]
    MissingField(String),

    /// A getter's required check failed because the field is absent or
    /// holds the empty string.
    #[error("field '{0}' does not exist or is empty")]
    MissingOrEmpty(String),

    /// A numeric getter's required check failed.
    #[error("field '{0}' does not exist or is not numeric")]
    NotNumeric(String),

    /// A date getter's field was present and non-empty but unparsable.
    #[error("'{value}' is not a valid date format for field '{field}'")]
    InvalidFormat { field: String, value: String },
}

impl Error {
    /// Whether this is a recoverable field-level failure (the field was
    /// missing, empty, or held an unusable value), as opposed to a
    /// contract violation.
    ///
    /// Field-level failures are the ones the lenient getters turn into
    /// `None`; `InvalidInput` and `InvalidArgument` are never downgraded.
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            Error::MissingField(_)
                | Error::MissingOrEmpty(_)
                | Error::NotNumeric(_)
                | Error::InvalidFormat { .. }
        )
    }

    /// Field name the failure refers to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingField(field)
            | Error::MissingOrEmpty(field)
            | Error::NotNumeric(field) => Some(field),
            Error::InvalidFormat { field, .. } => Some(field),
            Error::InvalidInput | Error::InvalidArgument(_) => None,
        }
    }
}
