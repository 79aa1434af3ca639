use clap::Parser;
use clarityplan::gemini::{self, GeminiClient};
use clarityplan::session::SessionStore;
use clarityplan::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Gemini API key used for clarity plan generation.
    #[clap(env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: String,

    /// Model used for generation.
    #[arg(long, env, default_value = gemini::DEFAULT_MODEL)]
    model: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=info,clarityplan=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let state = AppState {
        sessions: SessionStore::new(),
        gemini: GeminiClient::new(args.gemini_api_key, args.model),
    };
    let app = clarityplan::router(state);

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, app).await?;

    Ok(())
}
