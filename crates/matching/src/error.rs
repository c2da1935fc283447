use thiserror::Error;

/// Failures reported by a recipe source
///
/// Matching itself never fails; these only come from fetching candidate recipes.
#[derive(Error, Debug)]
pub enum RecipeSourceError {
    #[error("Recipe service API key is not configured")]
    MissingApiKey,

    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    #[error("Recipe service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed recipe payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Recipe source error: {0}")]
    Generic(String),
}

impl RecipeSourceError {
    /// Classify an HTTP error response from an upstream recipe API
    ///
    /// A [`crate::RecipeSource`] backed by a remote API maps every non-success
    /// response through this, so callers see the same variants whatever the provider.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();

        match status {
            401 | 403 => RecipeSourceError::MissingApiKey,
            // Quota exhaustion is reported as 402 by some recipe APIs
            402 | 429 => RecipeSourceError::RateLimited,
            400 | 404 | 422 => RecipeSourceError::Validation(message),
            500..=599 => RecipeSourceError::ServiceUnavailable(message),
            _ => RecipeSourceError::Generic(format!("HTTP {status}: {message}")),
        }
    }

    /// Whether the same request may succeed later
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RecipeSourceError::RateLimited
                | RecipeSourceError::ServiceUnavailable(_)
                | RecipeSourceError::Network(_)
        )
    }
}
