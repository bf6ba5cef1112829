use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::{FetchError, HttpClient};

/// Image payload inside a tile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TileImage {
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Structured image-plus-caption unit attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tile {
    pub image: TileImage,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sub_header: Option<String>,
}

/// One article record from the bulk listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    pub article_url: String,
    pub default_tile: Tile,
    #[serde(default)]
    pub preferred_tile: Option<Tile>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub primary_category: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    /// Tile whose image represents the article; preferred wins over default.
    pub fn display_tile(&self) -> &Tile {
        self.preferred_tile.as_ref().unwrap_or(&self.default_tile)
    }
}

/// Bulk article listing as returned by the grid endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleListing {
    pub article_count: u32,
    pub article_grid: Vec<Article>,
}

impl ArticleListing {
    /// Fetches the full listing once; callers index it for a whole cycle.
    pub async fn fetch(client: &HttpClient, url: &str) -> Result<Self, FetchError> {
        client.get_json(url).await
    }
}

/// Where a candidate slug was confirmed, and what image it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleHit {
    /// Article path relative to the content origin.
    pub article_url: String,
    /// Display image path, when the lookup strategy knows it.
    pub image_url: Option<String>,
}

/// A way of answering "does an article exist at this slug".
///
/// The bulk listing and the direct probe differ in network cost and in what
/// they can report; both answer the same question, so the resolver does not
/// care which one it is given.
#[async_trait]
pub trait ArticleLookup: Send + Sync {
    async fn find(&self, slug: &str) -> Result<Option<ArticleHit>, FetchError>;
}

/// Lookup over a pre-fetched bulk listing; one request serves a whole cycle.
pub struct ListingLookup {
    by_url: HashMap<String, ArticleHit>,
}

impl ListingLookup {
    pub fn new(listing: &ArticleListing) -> Self {
        let by_url = listing
            .article_grid
            .iter()
            .map(|article| {
                let hit = ArticleHit {
                    article_url: article.article_url.clone(),
                    image_url: Some(article.display_tile().image.image_url.clone()),
                };
                (article.article_url.clone(), hit)
            })
            .collect();
        Self { by_url }
    }
}

#[async_trait]
impl ArticleLookup for ListingLookup {
    async fn find(&self, slug: &str) -> Result<Option<ArticleHit>, FetchError> {
        Ok(self.by_url.get(slug).cloned())
    }
}

/// Lookup that probes the live article host, one request per candidate.
///
/// Cannot report an image: the probe only confirms the page exists.
pub struct ProbeLookup {
    client: HttpClient,
    origin: String,
}

impl ProbeLookup {
    pub fn new(client: HttpClient, origin: impl Into<String>) -> Self {
        Self {
            client,
            origin: origin.into(),
        }
    }
}

#[async_trait]
impl ArticleLookup for ProbeLookup {
    async fn find(&self, slug: &str) -> Result<Option<ArticleHit>, FetchError> {
        let url = format!("{}{}", self.origin, slug);
        if self.client.exists(&url).await? {
            Ok(Some(ArticleHit {
                article_url: slug.to_string(),
                image_url: None,
            }))
        } else {
            Ok(None)
        }
    }
}
