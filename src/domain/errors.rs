use thiserror::Error;

/// Failures while turning [`RequestParameters`](super::entities::RequestParameters)
/// into a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("invalid header format: '{pair}'. Use 'Key:Value' pairs separated by ';'")]
    HeaderFormat { pair: String },

    #[error("failed to build HTTP request: {0}")]
    Construction(String),

    #[error("HTTP request execution failed: {0}")]
    Transport(String),

    #[error("failed to read response body: {0}")]
    Read(String),
}

/// Failures while reading answers from the prompter.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before '{field}' was provided")]
    InputClosed { field: &'static str },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
