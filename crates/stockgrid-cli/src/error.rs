use stockgrid_core::CoreError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] stockgrid_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Fetch(#[from] stockgrid_core::FetchError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(error) => Self::Validation(error),
            CoreError::Fetch(error) => Self::Fetch(error),
            CoreError::Serialization(error) => Self::Serialization(error),
            CoreError::Io(error) => Self::Io(error),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Fetch(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use stockgrid_core::{FetchError, ValidationError};

    use super::*;

    #[test]
    fn core_errors_keep_their_exit_codes() {
        let validation = CliError::from(CoreError::from(ValidationError::EmptyExport));
        assert_eq!(validation.exit_code(), 2);

        let fetch = CliError::from(CoreError::from(FetchError::network("offline")));
        assert_eq!(fetch.exit_code(), 3);

        let io = CliError::from(CoreError::from(std::io::Error::other("disk full")));
        assert_eq!(io.exit_code(), 10);
    }
}
