use std::sync::Mutex;

use minefeed_core::VersionData;
use minefeed_engine::{
    resolve_article, ArticleListing, EventSink, FetchSettings, HttpClient, ListingLookup,
    ProbeLookup, ResolveEvent,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORIGIN: &str = "https://minecraft.net";

#[derive(Default)]
struct TestSink {
    events: Mutex<Vec<ResolveEvent>>,
}

impl TestSink {
    fn take(&self) -> Vec<ResolveEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }

    fn attempts(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                ResolveEvent::Attempt { slug } => Some(slug.clone()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: ResolveEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn listing_with(slugs_and_images: &[(&str, &str)]) -> ArticleListing {
    let grid: Vec<serde_json::Value> = slugs_and_images
        .iter()
        .map(|(slug, image)| {
            serde_json::json!({
                "article_url": slug,
                "default_tile": {
                    "image": { "imageURL": image, "alt": "tile" },
                    "title": "article"
                },
                "categories": [],
                "tags": []
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({
        "article_count": grid.len(),
        "article_grid": grid
    }))
    .expect("listing decodes")
}

#[tokio::test]
async fn release_resolves_to_exact_listing_match() {
    feed_logging::initialize_for_tests();
    let listing = listing_with(&[(
        "/en-us/article/minecraft-java-edition-1-20-1",
        "/content/dam/tile-1-20-1.jpg",
    )]);
    let lookup = ListingLookup::new(&listing);
    let sink = TestSink::default();

    let data = VersionData::Release {
        id: "1.20.1".to_string(),
    };
    let resolved = resolve_article(&lookup, ORIGIN, &data, &sink)
        .await
        .expect("article found");

    assert_eq!(
        resolved.url,
        "https://minecraft.net/en-us/article/minecraft-java-edition-1-20-1"
    );
    assert_eq!(
        resolved.image_url.as_deref(),
        Some("https://minecraft.net/content/dam/tile-1-20-1.jpg")
    );
    assert_eq!(sink.attempts().len(), 1);
}

#[tokio::test]
async fn pre_release_falls_back_to_lower_numbers() {
    feed_logging::initialize_for_tests();
    // Only pre-release 1 ever got an article; number 2 was skipped.
    let listing = listing_with(&[(
        "/en-us/article/minecraft-1-20-pre-release-1",
        "/content/dam/pre-1.jpg",
    )]);
    let lookup = ListingLookup::new(&listing);
    let sink = TestSink::default();

    let data = VersionData::PreRelease {
        release: "1.20".to_string(),
        number: 2,
    };
    let resolved = resolve_article(&lookup, ORIGIN, &data, &sink)
        .await
        .expect("article found");

    assert_eq!(
        resolved.url,
        "https://minecraft.net/en-us/article/minecraft-1-20-pre-release-1"
    );
    assert_eq!(
        sink.attempts(),
        vec![
            "/en-us/article/minecraft-1-20-pre-release-2".to_string(),
            "/en-us/article/minecraft-1-20-pre-release-1".to_string(),
        ]
    );
}

#[tokio::test]
async fn missing_article_yields_none_not_an_error() {
    feed_logging::initialize_for_tests();
    let listing = listing_with(&[]);
    let lookup = ListingLookup::new(&listing);
    let sink = TestSink::default();

    let data = VersionData::PreRelease {
        release: "1.20".to_string(),
        number: 1,
    };
    let resolved = resolve_article(&lookup, ORIGIN, &data, &sink).await;

    assert_eq!(resolved, None);
    let events = sink.take();
    assert!(events
        .iter()
        .any(|event| matches!(event, ResolveEvent::Miss { .. })));
}

#[tokio::test]
async fn probe_lookup_walks_the_live_host() {
    feed_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en-us/article/minecraft-1-20-pre-release-1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = HttpClient::new(&FetchSettings::default()).expect("http client");
    let lookup = ProbeLookup::new(client, server.uri());
    let sink = TestSink::default();

    let data = VersionData::PreRelease {
        release: "1.20".to_string(),
        number: 3,
    };
    let resolved = resolve_article(&lookup, &server.uri(), &data, &sink)
        .await
        .expect("article found");

    assert_eq!(
        resolved.url,
        format!("{}/en-us/article/minecraft-1-20-pre-release-1", server.uri())
    );
    assert_eq!(resolved.image_url, None);
    assert_eq!(sink.attempts().len(), 3);
}

#[tokio::test]
async fn preferred_tile_wins_over_default() {
    feed_logging::initialize_for_tests();
    let listing: ArticleListing = serde_json::from_value(serde_json::json!({
        "article_count": 1,
        "article_grid": [{
            "article_url": "/en-us/article/minecraft-snapshot-23w18a",
            "default_tile": {
                "image": { "imageURL": "/content/dam/default.jpg" }
            },
            "preferred_tile": {
                "image": { "imageURL": "/content/dam/preferred.jpg" }
            }
        }]
    }))
    .expect("listing decodes");
    let lookup = ListingLookup::new(&listing);
    let sink = TestSink::default();

    let data = VersionData::Snapshot {
        id: "23w18a".to_string(),
    };
    let resolved = resolve_article(&lookup, ORIGIN, &data, &sink)
        .await
        .expect("article found");

    assert_eq!(
        resolved.image_url.as_deref(),
        Some("https://minecraft.net/content/dam/preferred.jpg")
    );
}
