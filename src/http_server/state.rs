use std::sync::Arc;

use crate::config::{ConfigError, OutputMode};
use crate::suggest::SuggestService;

pub struct AppState {
    /// The suggestion pipeline, or the configuration error that prevented
    /// building it. The server starts either way; requests surface the error.
    pub service: Result<Arc<SuggestService>, ConfigError>,
    pub output_mode: OutputMode,
}
