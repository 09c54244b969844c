use color_eyre::eyre::Result;

/// Port trait wrapping the generative-text capability used by the suggestion
/// flow.
///
/// Implementations live in `gemini::generator` (production) or test mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SuggestionGenerator: Send + Sync {
    /// Produce up to `count` "Title by Artist" candidate strings for the
    /// user's prompt, in the order the model suggested them. An empty list is
    /// a valid outcome, not an error.
    async fn suggest_songs(&self, prompt: &str, count: usize) -> Result<Vec<String>>;
}
