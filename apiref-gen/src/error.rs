use miette::Diagnostic;
use thiserror::Error;

use crate::DescribeError;

/// Result type for catalog generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to describe the response of '{endpoint}'")]
    #[diagnostic(code(apiref::describe))]
    Describe {
        endpoint: String,
        #[source]
        #[diagnostic_source]
        source: DescribeError,
    },
}

impl Error {
    /// Name of the endpoint the failure belongs to.
    pub fn endpoint(&self) -> &str {
        match self {
            Error::Describe { endpoint, .. } => endpoint,
        }
    }
}
