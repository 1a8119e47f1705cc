use thiserror::Error;

/// Rejected user input. Nothing is mutated when one of these is raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Value `{0}` is not a number")]
    InvalidValue(String),
    #[error("Value must be greater than zero (got {0})")]
    NonPositiveValue(f64),
    #[error("Unknown entry type `{0}`; expected `inc` or `exp`")]
    UnknownKind(String),
}

/// Failure to obtain raw input from the form collaborator.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input cancelled")]
    Cancelled,
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid entry id `{0}`; expected `exp-<n>` or `inc-<n>`")]
    InvalidCompositeId(String),
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
