use crate::validation::FieldRole;

/// Field validation failures.
///
/// The `Display` strings are part of the public interface: they are returned verbatim by
/// the REST API and shown to users, so they must not change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} field mandatory!")]
    MissingField(FieldRole),
    #[error("{0} must be all digits and non negative!")]
    NotNumeric(FieldRole),
    #[error("Postcode must be at least 4 digits!")]
    TooShort,
}

/// Failures reported by an address lookup collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No matching records, or any non-success reply from the collaborator.
    #[error("No results found!")]
    NotFound,
    #[error("lookup transport failed: {0}")]
    Transport(String),
}

/// Errors surfaced by the workflow orchestrator.
///
/// Each `Display` string is the human-readable message stored in the workflow's `error`
/// field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No addresses found!")]
    NotFound,
    #[error("An error occurred while fetching addresses.")]
    Transport(String),
    #[error("First name and last name fields mandatory!")]
    MissingPersonalInfo,
    #[error("No address selected, try to select an address or find one if you haven't")]
    NoSelection,
    #[error("Selected address not found")]
    SelectionNotFound,
    #[error("A search is already in progress.")]
    Busy,
}

impl From<LookupError> for WorkflowError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound => WorkflowError::NotFound,
            LookupError::Transport(detail) => WorkflowError::Transport(detail),
        }
    }
}

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;
pub type WorkflowResult<T> = std::result::Result<T, WorkflowError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
