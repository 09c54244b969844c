use std::sync::Arc;

use color_eyre::eyre::{Context, Result};

use crate::ports::catalog::{CatalogError, CatalogSearcher, ResolvedTrack};
use crate::ports::generator::SuggestionGenerator;

/// Orchestrates the two-step flow: generate candidates, then resolve each
/// one against the catalog in generation order.
pub struct SuggestService {
    generator: Arc<dyn SuggestionGenerator>,
    catalog: Arc<dyn CatalogSearcher>,
    suggestion_count: usize,
}

impl SuggestService {
    pub fn new(
        generator: Arc<dyn SuggestionGenerator>,
        catalog: Arc<dyn CatalogSearcher>,
        suggestion_count: usize,
    ) -> Self {
        Self {
            generator,
            catalog,
            suggestion_count,
        }
    }

    /// Resolve a prompt into tracks. A candidate without a catalog hit is
    /// dropped; a failed search call for one candidate is treated the same
    /// way. Authentication failures abort the whole request.
    pub async fn suggest(&self, prompt: &str) -> Result<Vec<ResolvedTrack>> {
        let candidates = self
            .generator
            .suggest_songs(prompt, self.suggestion_count)
            .await
            .wrap_err("Failed to generate song suggestions")?;

        let mut results = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            match self.catalog.find_track(candidate).await {
                Ok(Some(track)) => results.push(track),
                Ok(None) => {
                    tracing::debug!("No catalog match for candidate '{}'", candidate);
                }
                Err(CatalogError::Search(reason)) => {
                    tracing::warn!(
                        "Search failed for candidate '{}', skipping it: {}",
                        candidate,
                        reason
                    );
                }
                Err(err @ CatalogError::Authentication(_)) => {
                    return Err(err).wrap_err("Failed to resolve suggestions");
                }
            }
        }

        tracing::info!(
            "Resolved {} of {} candidates for prompt",
            results.len(),
            candidates.len()
        );
        Ok(results)
    }
}
