//! Minefeed core: pure version classification, slug building, and the feed model.
mod feed;
mod slug;
mod version;

pub use feed::{FeedItem, FeedMetadata, VersionFeed};
pub use slug::{article_candidates, ARTICLE_ROOT};
pub use version::{classify, ReleaseChannel, VersionData};
