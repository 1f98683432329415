/// Reasons a form value or a whole form is rejected.
///
/// These are plain values: nothing in `scp-core` raises them as panics, and the caller
/// decides whether a given error becomes an inline hint or a blocking message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("field `{0}` is required")]
    MissingField(String),
    #[error("date must be in DD/MM/YYYY form")]
    MalformedDate,
    #[error("date and time must be in DD/MM/YYYY HH:mm form")]
    MalformedDateTime,
    #[error("value has {actual} digits, at most {max} allowed")]
    LengthExceeded { max: usize, actual: usize },
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("`{value}` is not an accepted value for `{field}`")]
    InvalidOption { field: String, value: String },
}

pub type FormResult<T> = std::result::Result<T, FormError>;

/// Errors raised while resolving startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
