//! Sky Blitz Game Server
//!
//! Backend for the Sky Blitz browser shooter: serves the game page, the
//! fixed initial configuration, and the file-backed top-10 leaderboard.

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sky_blitz::{GameServer, HighScoreStore, ServerConfig, HIGH_SCORES_FILE, VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Sky Blitz Server v{}", VERSION);

    // Create the leaderboard file with an empty array if it is missing
    let store = Arc::new(HighScoreStore::new(HIGH_SCORES_FILE));
    store.ensure_exists()?;
    info!("Leaderboard file: {}", store.path().display());

    let config = ServerConfig::default();
    GameServer::new(config, store).run().await?;

    Ok(())
}
