use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use travel_hf::{HfClient, HfConfig, HfEmbedder, LlmProvider};
use travel_rag::RagEngine;
use travel_server::{AppContext, ChatPipeline, RagPipeline, router};

#[derive(Parser)]
#[command(name = "travel-ai")]
#[command(about = "Travel.AI conversational travel assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve document-grounded answers from an indexed PDF
    Rag {
        /// Source document indexed at startup
        #[arg(long, default_value = "data.pdf")]
        document: PathBuf,
    },
    /// Serve persona chat over caller-supplied history
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = HfConfig::from_env()?;
    let llm = Arc::new(HfClient::new(config.clone())?);
    info!(model = llm.model_id(), "inference client ready");

    // All state the handlers touch is built here, before the listener binds.
    // A failure at any step aborts startup.
    let context = match cli.mode {
        Mode::Rag { document } => {
            info!(document = %document.display(), "loading source document");
            let pages = travel_rag::load_pdf(&document)?;
            info!(pages = pages.len(), "embedding pages");

            let embedder = Arc::new(HfEmbedder::new(config)?);
            let engine = RagEngine::build(embedder, pages).await?;
            info!(chunks = engine.chunk_count(), "vector index ready");

            Arc::new(AppContext::new(Arc::new(RagPipeline::new(llm, engine))))
        }
        Mode::Chat => Arc::new(AppContext::new(Arc::new(ChatPipeline::new(llm)))),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    info!("Travel.AI listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(context)).await?;

    Ok(())
}
