use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use triage::{ArtifactStore, Predictor};
use triage::server::{startup, AppState, ServerConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Directory holding model.onnx and labels.json; defaults to the
    /// platform cache directory (override with TRIAGE_CACHE)
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Base URL to fetch the artifact set from before starting
    #[arg(long)]
    fetch: Option<String>,

    /// Skip manifest verification of the artifacts
    #[arg(long)]
    skip_verify: bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let store = match &args.models_dir {
        Some(dir) => ArtifactStore::new(dir)?,
        None => ArtifactStore::new_default()?,
    };

    if let Some(base_url) = &args.fetch {
        info!("Fetching model artifacts from {}", base_url);
        store
            .fetch(base_url)
            .await
            .context("failed to fetch model artifacts")?;
    }

    if !store.is_present() {
        anyhow::bail!(
            "model artifacts not found in {:?}; place model.onnx and labels.json there or pass --fetch",
            store.dir()
        );
    }
    if !args.skip_verify && !store.verify().context("failed to verify model artifacts")? {
        anyhow::bail!(
            "model artifacts in {:?} failed manifest verification",
            store.dir()
        );
    }

    let predictor = Predictor::builder()
        .with_model_file(store.model_path())?
        .with_labels_file(store.labels_path())?
        .build()?;
    info!("Model and label decoder loaded successfully");

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    startup(config, AppState { predictor }).await?;
    Ok(())
}
