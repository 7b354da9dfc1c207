//! No-argument entry point: runs one generation pipeline in the process
//! working directory. Exits 0 on success, non-zero on any step failure.

use anyhow::Context;

use mal_parsergen::{Orchestrator, Workspace};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logging first, before any other work. RUST_LOG overrides the level;
    // it cannot change what the tool does.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("mal_parsergen {}", mal_parsergen::VERSION);

    let root = std::env::current_dir().context("failed to resolve the working directory")?;
    let mut orchestrator = Orchestrator::new(Workspace::new(root));
    orchestrator.run().await?;
    Ok(())
}
