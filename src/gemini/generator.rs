use color_eyre::eyre::Result;

use crate::gemini::client::GeminiClient;
use crate::gemini::parse::{CandidateFormat, parse_candidates};
use crate::ports::generator::SuggestionGenerator;

/// Production `SuggestionGenerator` backed by Gemini.
pub struct GeminiSuggestionGenerator {
    client: GeminiClient,
    format: CandidateFormat,
}

impl GeminiSuggestionGenerator {
    pub fn new(client: GeminiClient, format: CandidateFormat) -> Self {
        Self { client, format }
    }
}

fn build_instruction(prompt: &str, count: usize, format: CandidateFormat) -> String {
    match format {
        CandidateFormat::JsonArray => format!(
            "Based on the user input \"{prompt}\", suggest {count} real songs. \
             Give ONLY the song title and artist. Format as a JSON array of strings, \
             for example: [\"Bohemian Rhapsody by Queen\", \"Stairway to Heaven by Led Zeppelin\"]"
        ),
        CandidateFormat::Lines => format!(
            "Based on the user input \"{prompt}\", suggest {count} real songs. \
             Give ONLY the song title and artist, one suggestion per line, \
             with no numbering and no extra commentary."
        ),
    }
}

#[async_trait::async_trait]
impl SuggestionGenerator for GeminiSuggestionGenerator {
    async fn suggest_songs(&self, prompt: &str, count: usize) -> Result<Vec<String>> {
        let instruction = build_instruction(prompt, count, self.format);

        tracing::debug!("Requesting {} song suggestions from Gemini", count);
        let reply = self.client.generate(&instruction).await?;

        let candidates = parse_candidates(&reply, self.format)?;
        tracing::debug!("Gemini produced {} candidates", candidates.len());

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_carries_prompt_count_and_format() {
        let instruction = build_instruction("upbeat workout songs", 5, CandidateFormat::JsonArray);

        assert!(instruction.contains("\"upbeat workout songs\""));
        assert!(instruction.contains("suggest 5 real songs"));
        assert!(instruction.contains("JSON array of strings"));

        let instruction = build_instruction("rainy day jazz", 3, CandidateFormat::Lines);

        assert!(instruction.contains("\"rainy day jazz\""));
        assert!(instruction.contains("one suggestion per line"));
    }
}
