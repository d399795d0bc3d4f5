use thiserror::Error;

/// User-facing generation failures. Raw transport and parse errors are
/// logged at the client boundary and never reach the view layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("API quota exceeded. Please try again later.")]
    QuotaExceeded,
    #[error("The service returned a response that does not match the expected shape. Please try again.")]
    MalformedResponse,
    #[error("Failed to generate content. Please check your inputs and try again.")]
    Failed,
}
