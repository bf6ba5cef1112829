use minefeed_core::{classify, FeedItem, FeedMetadata, VersionFeed};

use crate::{
    fetch_manifest, resolve_article, ArticleListing, ArticleLookup, EventSink, FetchError,
    HttpClient, ListingLookup, ProbeLookup, VersionEntry,
};

/// Which article-lookup strategy a cycle uses.
///
/// The bulk listing costs one request per cycle and is self-consistent; the
/// direct probe avoids depending on the grid endpoint at the price of one
/// request per candidate slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    Listing,
    Probe,
}

/// Everything a build cycle needs to know.
#[derive(Debug, Clone)]
pub struct CycleSettings {
    pub manifest_url: String,
    pub articles_url: String,
    pub article_origin: String,
    pub recent_count: usize,
    pub strategy: LookupStrategy,
    pub feed: FeedMetadata,
}

/// Builds the feed for the given versions, one version at a time.
///
/// Items keep the input order, and a version whose article cannot be
/// resolved still becomes an item, with an empty link and no image.
pub async fn build_feed(
    entries: &[&VersionEntry],
    lookup: &dyn ArticleLookup,
    origin: &str,
    meta: FeedMetadata,
    sink: &dyn EventSink,
) -> VersionFeed {
    let mut feed = VersionFeed::new(meta);
    for entry in entries {
        let data = classify(&entry.id, entry.channel);
        let resolved = resolve_article(lookup, origin, &data, sink).await;
        match &resolved {
            Some(article) => log::info!("version {}: {}", entry.id, article.url),
            None => log::warn!("version {}: no matching article", entry.id),
        }
        feed.push(FeedItem {
            title: entry.id.clone(),
            link: resolved
                .as_ref()
                .map(|article| article.url.clone())
                .unwrap_or_default(),
            id: resolved.as_ref().map(|article| article.url.clone()),
            date: entry.release_time,
            image: resolved.and_then(|article| article.image_url),
        });
    }
    feed
}

/// Runs one full fetch-resolve-assemble cycle.
///
/// A manifest or listing failure abandons the cycle; the caller retries on
/// the next scheduled tick.
pub async fn run_cycle(
    client: &HttpClient,
    settings: &CycleSettings,
    sink: &dyn EventSink,
) -> Result<VersionFeed, FetchError> {
    log::info!("fetching version manifest");
    let manifest = fetch_manifest(client, &settings.manifest_url).await?;
    let recent = manifest.recent(settings.recent_count);
    log::info!("assembling feed for {} versions", recent.len());

    let lookup: Box<dyn ArticleLookup> = match settings.strategy {
        LookupStrategy::Listing => {
            log::info!("fetching article listing");
            let listing = ArticleListing::fetch(client, &settings.articles_url).await?;
            log::info!("listing holds {} articles", listing.article_grid.len());
            Box::new(ListingLookup::new(&listing))
        }
        LookupStrategy::Probe => Box::new(ProbeLookup::new(
            client.clone(),
            settings.article_origin.clone(),
        )),
    };

    Ok(build_feed(
        &recent,
        lookup.as_ref(),
        &settings.article_origin,
        settings.feed.clone(),
        sink,
    )
    .await)
}
