// Cache store behavior against real temporary directories

use pkgscout::SearchCache;
use std::time::Duration;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

#[test]
fn test_round_trip_within_ttl() {
    let dir = tempfile::tempdir().unwrap();
    let cache = SearchCache::at(dir.path(), DAY);

    assert!(!cache.has_valid());
    assert!(cache.read().is_none());

    cache.write(r#"[{"repo":"foo/bar"}]"#).unwrap();

    assert!(cache.has_valid());
    assert_eq!(cache.read().as_deref(), Some(r#"[{"repo":"foo/bar"}]"#));
}

#[test]
fn test_write_overwrites_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let cache = SearchCache::at(dir.path(), DAY);

    cache.write("first payload").unwrap();
    cache.write("second payload").unwrap();

    assert_eq!(cache.read().as_deref(), Some("second payload"));
}

#[test]
fn test_expired_artifact_reads_as_absent() {
    let dir = tempfile::tempdir().unwrap();

    // Zero TTL: the artifact is stale the moment it is written
    let cache = SearchCache::at(dir.path(), Duration::ZERO);
    cache.write("payload").unwrap();

    // The file itself is intact on disk, only the read view expires
    assert!(dir.path().join("registry.json").exists());
    assert!(!cache.has_valid());
    assert!(cache.read().is_none());
}

#[test]
fn test_fresh_cache_becomes_readable_with_longer_ttl() {
    let dir = tempfile::tempdir().unwrap();

    SearchCache::at(dir.path(), Duration::ZERO)
        .write("payload")
        .unwrap();

    // Same artifact, judged against a 24h window
    let cache = SearchCache::at(dir.path(), DAY);
    assert!(cache.has_valid());
    assert_eq!(cache.read().as_deref(), Some("payload"));
}

#[test]
fn test_write_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested").join("deeper");

    let cache = SearchCache::at(&nested, DAY);
    cache.write("payload").unwrap();

    assert!(nested.join("registry.json").exists());
    assert_eq!(cache.read().as_deref(), Some("payload"));
}

#[test]
fn test_missing_directory_is_a_miss() {
    let dir = tempfile::tempdir().unwrap();
    let cache = SearchCache::at(dir.path().join("never-created"), DAY);

    assert!(!cache.has_valid());
    assert!(cache.read().is_none());
}
