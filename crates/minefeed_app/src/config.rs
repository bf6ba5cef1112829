use std::env;
use std::path::PathBuf;
use std::time::Duration;

use minefeed_core::FeedMetadata;
use minefeed_engine::{CycleSettings, FetchSettings, LookupStrategy};

const MANIFEST_URL: &str = "https://piston-meta.mojang.com/mc/game/version_manifest.json";
const ARTICLES_URL: &str = "https://www.minecraft.net/content/minecraft-net/_jcr_content.articles.grid/content/minecraft-net/_jcr_content.articles.grid?pageSize=2000&tagsPath=minecraft:stockholm/news";
const ARTICLE_ORIGIN: &str = "https://minecraft.net";
const FAVICON_URL: &str =
    "https://minecraft.net/etc.clientlibs/minecraft/clientlibs/main/resources/favicon.ico";

/// Full runtime configuration.
///
/// Defaults mirror the deployed service; `PORT` can be overridden from the
/// environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub output_dir: PathBuf,
    pub refresh_interval: Duration,
    pub fetch: FetchSettings,
    pub cycle: CycleSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            output_dir: PathBuf::from("static"),
            refresh_interval: Duration::from_secs(15 * 60),
            fetch: FetchSettings::default(),
            cycle: CycleSettings {
                manifest_url: MANIFEST_URL.to_string(),
                articles_url: ARTICLES_URL.to_string(),
                article_origin: ARTICLE_ORIGIN.to_string(),
                recent_count: 10,
                strategy: LookupStrategy::Listing,
                feed: FeedMetadata {
                    title: "Minecraft Updates".to_string(),
                    canonical_uri: "https://example.com".to_string(),
                    description: "Recent Minecraft version releases".to_string(),
                    copyright: "Public Domain".to_string(),
                    favicon_url: FAVICON_URL.to_string(),
                },
            },
        }
    }
}

impl AppConfig {
    /// Applies environment overrides on top of the defaults.
    ///
    /// A malformed `PORT` is a configuration error, not a silent fallback.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Ok(port) = env::var("PORT") {
            config.port = parse_port(&port)?;
        }
        Ok(config)
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid PORT value: {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_parses_with_whitespace() {
        assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(parse_port("eighty").is_err());
        assert!(parse_port("70000").is_err());
    }
}
