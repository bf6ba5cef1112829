//! Minefeed engine: HTTP clients, article resolution, and feed publication.
mod articles;
mod cycle;
mod fetch;
mod manifest;
mod persist;
mod resolve;
mod types;

pub use articles::{
    Article, ArticleHit, ArticleListing, ArticleLookup, ListingLookup, ProbeLookup, Tile,
    TileImage,
};
pub use cycle::{build_feed, run_cycle, CycleSettings, LookupStrategy};
pub use fetch::{FetchSettings, HttpClient};
pub use manifest::{fetch_manifest, Latest, VersionEntry, VersionManifest};
pub use persist::{ensure_output_dir, FeedWriter, PersistError, FEED_ATOM, FEED_RSS};
pub use resolve::{resolve_article, ResolvedArticle};
pub use types::{EventSink, FetchError, FetchErrorKind, LogEventSink, ResolveEvent};
