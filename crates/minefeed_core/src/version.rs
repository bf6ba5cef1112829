use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Release channel as reported by the version manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseChannel {
    Release,
    Snapshot,
    OldAlpha,
    OldBeta,
}

/// Structured interpretation of a version id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionData {
    Release { id: String },
    Snapshot { id: String },
    PreRelease { release: String, number: u32 },
    ReleaseCandidate { release: String, number: u32 },
}

static PRE_RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)-pre(\d+)$").expect("pre-release pattern"));
static RELEASE_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)-rc(\d+)$").expect("release-candidate pattern"));

/// Classifies a manifest entry into its structured variant.
///
/// Classification is total: the `release` channel wins outright, the pre/rc
/// patterns are tried next, and everything else is a snapshot. A
/// release-looking id on a non-release channel stays a snapshot; the pattern
/// match is trusted over semantic reasoning only for the pre/rc cases.
pub fn classify(id: &str, channel: ReleaseChannel) -> VersionData {
    if channel == ReleaseChannel::Release {
        return VersionData::Release { id: id.to_string() };
    }

    if let Some((release, number)) = match_numbered(&PRE_RELEASE, id) {
        return VersionData::PreRelease { release, number };
    }

    if let Some((release, number)) = match_numbered(&RELEASE_CANDIDATE, id) {
        return VersionData::ReleaseCandidate { release, number };
    }

    VersionData::Snapshot { id: id.to_string() }
}

fn match_numbered(pattern: &Regex, id: &str) -> Option<(String, u32)> {
    let captures = pattern.captures(id)?;
    // A suffix whose digits do not fit u32 falls through to Snapshot.
    let number = captures[2].parse().ok()?;
    Some((captures[1].to_string(), number))
}
