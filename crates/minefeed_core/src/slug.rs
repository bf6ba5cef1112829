use crate::VersionData;

/// Root path shared by every news article on the content site.
pub const ARTICLE_ROOT: &str = "/en-us/article/";

/// Builds the ordered candidate article paths for a classified version.
///
/// Release and snapshot versions map to exactly one slug. Pre-releases and
/// release candidates probe downward from their build number to 1, because
/// article slugs are not published for every intermediate number; the first
/// existing match wins.
pub fn article_candidates(data: &VersionData) -> Vec<String> {
    match data {
        VersionData::Release { id } => {
            vec![format!("{ARTICLE_ROOT}minecraft-java-edition-{}", dashed(id))]
        }
        VersionData::Snapshot { id } => {
            vec![format!("{ARTICLE_ROOT}minecraft-snapshot-{}", dashed(id))]
        }
        VersionData::PreRelease { release, number } => {
            numbered(release, "pre-release", *number)
        }
        VersionData::ReleaseCandidate { release, number } => {
            numbered(release, "release-candidate", *number)
        }
    }
}

fn numbered(release: &str, kind: &str, number: u32) -> Vec<String> {
    (1..=number)
        .rev()
        .map(|n| format!("{ARTICLE_ROOT}minecraft-{}-{kind}-{n}", dashed(release)))
        .collect()
}

fn dashed(version: &str) -> String {
    version.replace('.', "-")
}
