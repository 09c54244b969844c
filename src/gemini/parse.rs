use clap::ValueEnum;
use thiserror::Error;

/// Format the generator is instructed to reply in, and the matching parse
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CandidateFormat {
    /// A JSON array of strings, possibly wrapped in a markdown code fence
    JsonArray,
    /// One suggestion per line
    Lines,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("candidate list is not a valid JSON array of strings: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Extract candidate strings from the model's reply.
///
/// In JSON mode a reply that doesn't parse is an error; there is no fallback
/// to guessing. Line mode cannot fail. Entries are trimmed and blanks
/// dropped in both modes.
pub fn parse_candidates(text: &str, format: CandidateFormat) -> Result<Vec<String>, ParseError> {
    let entries: Vec<String> = match format {
        CandidateFormat::JsonArray => {
            let stripped = strip_code_fences(text);
            serde_json::from_str(stripped.trim())?
        }
        CandidateFormat::Lines => text.lines().map(str::to_string).collect(),
    };

    Ok(entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect())
}

fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_json_array() {
        let candidates = parse_candidates(
            r#"["Bohemian Rhapsody by Queen", "Stairway to Heaven by Led Zeppelin"]"#,
            CandidateFormat::JsonArray,
        )
        .unwrap();

        assert_eq!(
            candidates,
            vec![
                "Bohemian Rhapsody by Queen",
                "Stairway to Heaven by Led Zeppelin"
            ]
        );
    }

    #[test]
    fn test_parse_fenced_json_array() {
        let text = "```json\n[\"Song A by Artist A\", \"Song B by Artist B\"]\n```";
        let candidates = parse_candidates(text, CandidateFormat::JsonArray).unwrap();

        assert_eq!(candidates, vec!["Song A by Artist A", "Song B by Artist B"]);
    }

    #[test]
    fn test_parse_malformed_json_is_an_error() {
        let result = parse_candidates(
            "Here are some songs you might like!",
            CandidateFormat::JsonArray,
        );

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("not a valid JSON array")
        );
    }

    #[test]
    fn test_parse_json_empty_array() {
        let candidates = parse_candidates("```json\n[]\n```", CandidateFormat::JsonArray).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_parse_lines_drops_blanks() {
        let text = "Song A by Artist A\n\n  Song B by Artist B  \n   \n";
        let candidates = parse_candidates(text, CandidateFormat::Lines).unwrap();

        assert_eq!(candidates, vec!["Song A by Artist A", "Song B by Artist B"]);
    }

    #[test]
    fn test_parse_json_trims_entries() {
        let candidates = parse_candidates(
            r#"["  Song A by Artist A ", "", "Song B by Artist B"]"#,
            CandidateFormat::JsonArray,
        )
        .unwrap();

        assert_eq!(candidates, vec!["Song A by Artist A", "Song B by Artist B"]);
    }
}
