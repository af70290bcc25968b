use stockscope_core::SourceError;
use thiserror::Error;

/// Handler-level failures. The router turns every variant into a report;
/// rejected ticker syntax never gets here and reads as not found.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("{usage}")]
    Malformed { usage: String },
}

impl From<clap::Error> for CommandError {
    fn from(error: clap::Error) -> Self {
        Self::Malformed {
            usage: error.render().to_string(),
        }
    }
}

impl CommandError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Source(error) => error.code(),
            Self::Malformed { .. } => "malformed_input",
        }
    }
}

/// Process-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
            Self::Logging(_) => 11,
        }
    }
}
