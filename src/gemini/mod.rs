pub mod client;
pub mod generator;
pub mod parse;
pub mod types;

pub use client::{GeminiClient, GeminiError};
pub use generator::GeminiSuggestionGenerator;
pub use parse::CandidateFormat;
