use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use simpsonsua_core::{
    Activation, EpisodeListing, LogNotifier, Result, SimpsonsPlugin, SimpsonsScraper,
    SourceExtractor,
};
use tracing_subscriber::EnvFilter;

/// Hands the embedded player URL back unchanged.
struct Passthrough;

#[async_trait]
impl SourceExtractor for Passthrough {
    async fn extract_source(&self, url: &str) -> Result<String> {
        Ok(url.to_string())
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Credentials are optional; anonymous browsing only sees free episodes.
    let mut settings = HashMap::new();
    settings.insert(
        "simpsons_login".to_string(),
        std::env::var("SIMPSONS_LOGIN").unwrap_or_default(),
    );
    settings.insert(
        "simpsons_password".to_string(),
        std::env::var("SIMPSONS_PASSWORD").unwrap_or_default(),
    );

    let scraper = SimpsonsScraper::new(Arc::new(settings))?;
    let plugin = SimpsonsPlugin::new(scraper, Arc::new(Passthrough), Arc::new(LogNotifier));

    println!("📺 Головне меню\n");
    let root = plugin.root("video").await?;
    for (i, node) in root.iter().enumerate() {
        println!("  {}. {}", i + 1, node.label);
    }

    let Some(season) = root.first() else {
        return Ok(());
    };

    println!("\n📋 {}\n", season.label);
    let episodes = match plugin.activate(&season.action).await? {
        Activation::Listing(nodes) => nodes,
        _ => Vec::new(),
    };
    for node in &episodes {
        println!("  • {}", node.label);
    }

    let Some(episode) = episodes.first() else {
        return Ok(());
    };

    println!("\n🎬 {}\n", episode.label);
    match plugin.activate(&episode.action).await? {
        Activation::Episode(EpisodeListing::Sources(leaves)) => {
            for leaf in &leaves {
                println!("  {}", leaf.label);
                if let Activation::Playback(stream) = plugin.activate(&leaf.action).await? {
                    println!("    {}", stream);
                }
            }
        }
        Activation::Episode(EpisodeListing::Unavailable { notice }) => {
            let message = notice.map(|n| n.message).unwrap_or_else(|| "—".to_string());
            println!("  {}", message);
        }
        _ => {}
    }

    Ok(())
}
