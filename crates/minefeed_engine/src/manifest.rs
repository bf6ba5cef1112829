use chrono::{DateTime, Utc};
use minefeed_core::ReleaseChannel;
use serde::Deserialize;

use crate::{FetchError, HttpClient};

/// One version as listed by the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub channel: ReleaseChannel,
    pub url: String,
    pub time: DateTime<Utc>,
    pub release_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Latest {
    pub release: String,
    pub snapshot: String,
}

/// The authoritative list of known versions, newest first as published.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionManifest {
    pub latest: Latest,
    pub versions: Vec<VersionEntry>,
}

impl VersionManifest {
    /// The `count` most recent versions.
    ///
    /// The upstream manifest is assumed newest-first but not trusted: entries
    /// are re-sorted by release time descending, ties broken by id, so a
    /// silent upstream ordering change cannot misorder the feed.
    pub fn recent(&self, count: usize) -> Vec<&VersionEntry> {
        let mut entries: Vec<&VersionEntry> = self.versions.iter().collect();
        entries.sort_by(|a, b| {
            b.release_time
                .cmp(&a.release_time)
                .then_with(|| b.id.cmp(&a.id))
        });
        entries.truncate(count);
        entries
    }
}

/// Downloads and decodes the version manifest.
pub async fn fetch_manifest(client: &HttpClient, url: &str) -> Result<VersionManifest, FetchError> {
    client.get_json(url).await
}
