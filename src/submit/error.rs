use std::{
    error::Error,
    fmt::{Display, Formatter},
};

/// Local failures of a submission. Remote-reported compile or run failures
/// are not errors here; whatever body the service answers with is passed
/// through verbatim.
#[derive(Debug)]
pub enum SubmitError {
    /// The source file could not be read.
    Source(std::io::Error),
    /// The request body failed to serialize.
    Body(serde_json::Error),
    /// The request never produced a response body.
    Http(reqwest::Error),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SubmitError::Source(e) => write!(f, "could not read source file: {}", e),
            SubmitError::Body(e) => write!(f, "could not serialize request body: {}", e),
            SubmitError::Http(e) => write!(f, "compile request failed: {}", e),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SubmitError::Source(e) => Some(e),
            SubmitError::Body(e) => Some(e),
            SubmitError::Http(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SubmitError {
    fn from(e: std::io::Error) -> Self {
        SubmitError::Source(e)
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(e: serde_json::Error) -> Self {
        SubmitError::Body(e)
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        SubmitError::Http(e)
    }
}
