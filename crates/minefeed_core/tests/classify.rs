use minefeed_core::{classify, ReleaseChannel, VersionData};
use pretty_assertions::assert_eq;

#[test]
fn release_channel_always_wins() {
    assert_eq!(
        classify("1.20.1", ReleaseChannel::Release),
        VersionData::Release {
            id: "1.20.1".to_string()
        }
    );
    // The channel is authoritative even when the id looks like a pre-release.
    assert_eq!(
        classify("1.20-pre1", ReleaseChannel::Release),
        VersionData::Release {
            id: "1.20-pre1".to_string()
        }
    );
}

#[test]
fn pre_release_ids_capture_release_and_number() {
    assert_eq!(
        classify("1.20-pre2", ReleaseChannel::Snapshot),
        VersionData::PreRelease {
            release: "1.20".to_string(),
            number: 2
        }
    );
    assert_eq!(
        classify("1.20.5-pre14", ReleaseChannel::Snapshot),
        VersionData::PreRelease {
            release: "1.20.5".to_string(),
            number: 14
        }
    );
}

#[test]
fn release_candidate_ids_capture_release_and_number() {
    assert_eq!(
        classify("1.20-rc1", ReleaseChannel::Snapshot),
        VersionData::ReleaseCandidate {
            release: "1.20".to_string(),
            number: 1
        }
    );
}

#[test]
fn weekly_snapshot_ids_fall_through() {
    assert_eq!(
        classify("23w13a_or_b", ReleaseChannel::Snapshot),
        VersionData::Snapshot {
            id: "23w13a_or_b".to_string()
        }
    );
}

#[test]
fn release_looking_id_on_snapshot_channel_stays_snapshot() {
    assert_eq!(
        classify("1.20.1", ReleaseChannel::Snapshot),
        VersionData::Snapshot {
            id: "1.20.1".to_string()
        }
    );
}

#[test]
fn old_channels_classify_like_snapshots() {
    assert_eq!(
        classify("b1.8.1", ReleaseChannel::OldBeta),
        VersionData::Snapshot {
            id: "b1.8.1".to_string()
        }
    );
    assert_eq!(
        classify("a1.2.6", ReleaseChannel::OldAlpha),
        VersionData::Snapshot {
            id: "a1.2.6".to_string()
        }
    );
}

#[test]
fn pre_suffix_without_digits_is_snapshot() {
    assert_eq!(
        classify("1.20-pre", ReleaseChannel::Snapshot),
        VersionData::Snapshot {
            id: "1.20-pre".to_string()
        }
    );
    assert_eq!(
        classify("1.20-preview", ReleaseChannel::Snapshot),
        VersionData::Snapshot {
            id: "1.20-preview".to_string()
        }
    );
}
