use minefeed_core::{article_candidates, VersionData};

use crate::{ArticleLookup, EventSink, ResolveEvent};

/// Absolute article URL and display image for one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArticle {
    pub url: String,
    pub image_url: Option<String>,
}

/// Walks the candidate slugs for `data`, newest number first, and returns
/// the first confirmed article with its URLs made absolute against `origin`.
///
/// Lookup failures count as misses for that candidate, so a flaky probe can
/// never abort the batch; exhausting the candidates yields `None`.
pub async fn resolve_article(
    lookup: &dyn ArticleLookup,
    origin: &str,
    data: &VersionData,
    sink: &dyn EventSink,
) -> Option<ResolvedArticle> {
    for slug in article_candidates(data) {
        sink.emit(ResolveEvent::Attempt { slug: slug.clone() });
        match lookup.find(&slug).await {
            Ok(Some(hit)) => {
                sink.emit(ResolveEvent::Hit { slug });
                return Some(ResolvedArticle {
                    url: fix_origin(origin, &hit.article_url),
                    image_url: hit.image_url.map(|path| fix_origin(origin, &path)),
                });
            }
            Ok(None) => sink.emit(ResolveEvent::Miss { slug }),
            Err(error) => sink.emit(ResolveEvent::Failed { slug, error }),
        }
    }
    None
}

/// Prefixes a site-relative path with the content origin; already-absolute
/// URLs pass through untouched.
fn fix_origin(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{origin}{path}")
    }
}
