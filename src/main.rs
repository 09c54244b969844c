use clap::Parser;
use color_eyre::Result;

use song_scout::config::{Config, OutputMode};
use song_scout::gemini::CandidateFormat;
use song_scout::logging::init_tracing;
use song_scout::{HttpServerConfig, start};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The port to run the server on
    #[arg(short, long, default_value = "3000", env = "SONG_SCOUT_HTTP_PORT")]
    port: u16,

    /// Tracing filter, e.g. "info" or "song_scout=debug"
    #[arg(long, default_value = "info", env = "SONG_SCOUT_LOG")]
    tracing_level: String,

    /// Shape of successful /api/suggestions responses
    #[arg(long, value_enum, default_value = "tracks", env = "SONG_SCOUT_OUTPUT_MODE")]
    output_mode: OutputMode,

    /// How many songs to ask the generator for
    #[arg(long, default_value = "5", env = "SONG_SCOUT_SUGGESTION_COUNT")]
    suggestion_count: usize,

    /// Gemini model used for suggestions
    #[arg(
        long,
        default_value = "gemini-1.5-flash-latest",
        env = "SONG_SCOUT_GEMINI_MODEL"
    )]
    gemini_model: String,

    /// Reply format the generator is instructed to use
    #[arg(long, value_enum, default_value = "json-array", env = "SONG_SCOUT_CANDIDATE_FORMAT")]
    candidate_format: CandidateFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(&args.tracing_level)?;

    tracing::debug!("Song scout starting");
    let config = Config::from_env();

    tracing::info!("Starting HTTP server on port: {}", args.port);
    start(HttpServerConfig {
        port: args.port,
        output_mode: args.output_mode,
        suggestion_count: args.suggestion_count,
        gemini_model: args.gemini_model,
        candidate_format: args.candidate_format,
        config,
    })
    .await?;

    Ok(())
}
