use atom_syndication::{
    Entry, EntryBuilder, FeedBuilder, FixedDateTime, LinkBuilder, Text,
};
use chrono::{DateTime, Utc};
use rss::{ChannelBuilder, EnclosureBuilder, GuidBuilder, ItemBuilder};

/// Feed-level metadata. Static configuration, never computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedMetadata {
    pub title: String,
    pub canonical_uri: String,
    pub description: String,
    pub copyright: String,
    pub favicon_url: String,
}

/// One feed entry derived from a manifest version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// The version id, verbatim.
    pub title: String,
    /// Resolved article URL; empty when resolution failed.
    pub link: String,
    /// Stable identifier, present only when an article was resolved.
    pub id: Option<String>,
    /// The version's release time.
    pub date: DateTime<Utc>,
    /// Display image URL, when the resolver found one.
    pub image: Option<String>,
}

/// In-memory feed shared by both serializations.
///
/// Serialization is a pure function of the metadata and item list: the feed
/// `updated` field is the most recent item date, never the wall clock, so
/// identical inputs produce byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFeed {
    pub meta: FeedMetadata,
    pub items: Vec<FeedItem>,
}

impl VersionFeed {
    pub fn new(meta: FeedMetadata) -> Self {
        Self {
            meta,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: FeedItem) {
        self.items.push(item);
    }

    fn updated(&self) -> DateTime<Utc> {
        self.items
            .iter()
            .map(|item| item.date)
            .max()
            .unwrap_or_default()
    }

    /// Serializes the feed as an Atom 1.0 document.
    pub fn to_atom(&self) -> String {
        let entries: Vec<Entry> = self.items.iter().map(atom_entry).collect();
        let updated: FixedDateTime = self.updated().fixed_offset();

        let alternate = LinkBuilder::default()
            .href(self.meta.canonical_uri.clone())
            .rel("alternate".to_string())
            .build();

        FeedBuilder::default()
            .title(Text::plain(self.meta.title.clone()))
            .id(self.meta.canonical_uri.clone())
            .updated(updated)
            .subtitle(Some(Text::plain(self.meta.description.clone())))
            .rights(Some(Text::plain(self.meta.copyright.clone())))
            .icon(Some(self.meta.favicon_url.clone()))
            .links(vec![alternate])
            .entries(entries)
            .build()
            .to_string()
    }

    /// Serializes the feed as an RSS 2.0 document.
    pub fn to_rss(&self) -> String {
        let items: Vec<rss::Item> = self.items.iter().map(rss_item).collect();

        ChannelBuilder::default()
            .title(self.meta.title.clone())
            .link(self.meta.canonical_uri.clone())
            .description(self.meta.description.clone())
            .copyright(Some(self.meta.copyright.clone()))
            .items(items)
            .build()
            .to_string()
    }
}

fn atom_entry(item: &FeedItem) -> Entry {
    let updated: FixedDateTime = item.date.fixed_offset();

    let mut links = Vec::new();
    if !item.link.is_empty() {
        links.push(
            LinkBuilder::default()
                .href(item.link.clone())
                .rel("alternate".to_string())
                .build(),
        );
    }
    if let Some(image) = &item.image {
        links.push(
            LinkBuilder::default()
                .href(image.clone())
                .rel("enclosure".to_string())
                .mime_type(Some(image_mime(image).to_string()))
                .build(),
        );
    }

    // Atom requires an entry id; the version id is unique within a manifest,
    // so it stands in when no article was resolved.
    let id = item.id.clone().unwrap_or_else(|| item.title.clone());

    EntryBuilder::default()
        .title(Text::plain(item.title.clone()))
        .id(id)
        .updated(updated)
        .published(Some(updated))
        .links(links)
        .build()
}

fn rss_item(item: &FeedItem) -> rss::Item {
    let mut builder = ItemBuilder::default();
    builder
        .title(item.title.clone())
        .pub_date(item.date.to_rfc2822());

    if !item.link.is_empty() {
        builder.link(item.link.clone()).guid(
            GuidBuilder::default()
                .permalink(true)
                .value(item.link.clone())
                .build(),
        );
    }

    if let Some(image) = &item.image {
        builder.enclosure(
            EnclosureBuilder::default()
                .url(image.clone())
                // Byte length is unknown to the feed; RSS requires the field.
                .length("0".to_string())
                .mime_type(image_mime(image).to_string())
                .build(),
        );
    }

    builder.build()
}

fn image_mime(url: &str) -> &'static str {
    let extension = url
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}
