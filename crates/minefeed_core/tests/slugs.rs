use minefeed_core::{article_candidates, VersionData};
use pretty_assertions::assert_eq;

#[test]
fn release_slug_replaces_dots_with_dashes() {
    let data = VersionData::Release {
        id: "1.20.1".to_string(),
    };
    assert_eq!(
        article_candidates(&data),
        vec!["/en-us/article/minecraft-java-edition-1-20-1".to_string()]
    );
}

#[test]
fn snapshot_slug_uses_snapshot_prefix() {
    let data = VersionData::Snapshot {
        id: "23w13a".to_string(),
    };
    assert_eq!(
        article_candidates(&data),
        vec!["/en-us/article/minecraft-snapshot-23w13a".to_string()]
    );
}

#[test]
fn pre_release_candidates_descend_to_one() {
    let data = VersionData::PreRelease {
        release: "1.20".to_string(),
        number: 3,
    };
    assert_eq!(
        article_candidates(&data),
        vec![
            "/en-us/article/minecraft-1-20-pre-release-3".to_string(),
            "/en-us/article/minecraft-1-20-pre-release-2".to_string(),
            "/en-us/article/minecraft-1-20-pre-release-1".to_string(),
        ]
    );
}

#[test]
fn release_candidate_candidates_descend_to_one() {
    let data = VersionData::ReleaseCandidate {
        release: "1.20.5".to_string(),
        number: 2,
    };
    assert_eq!(
        article_candidates(&data),
        vec![
            "/en-us/article/minecraft-1-20-5-release-candidate-2".to_string(),
            "/en-us/article/minecraft-1-20-5-release-candidate-1".to_string(),
        ]
    );
}

#[test]
fn candidate_sequence_is_deterministic() {
    let data = VersionData::PreRelease {
        release: "1.21".to_string(),
        number: 7,
    };
    let first = article_candidates(&data);
    let second = article_candidates(&data);
    assert_eq!(first, second);

    // Strictly decreasing, ending at 1.
    assert_eq!(first.len(), 7);
    assert!(first.last().unwrap().ends_with("-1"));
}
