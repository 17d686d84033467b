mod common;

use common::{
    list_tree, release_json, reveal_release_archive, spawn_archive_host, spawn_github_api,
};
use reveal_scaffold::{
    build_github_client, resolve_latest_release, FetchError, InitConfig, InitError, Initializer,
    ScaffoldParams, UpstreamRepository,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[tokio::test]
async fn resolves_zipball_of_latest_release() {
    let zipball = "https://api.github.com/repos/hakimel/reveal.js/zipball/5.1.0";
    let api = spawn_github_api(59, release_json("5.1.0", Some(zipball))).await;
    let octocrab = build_github_client(None, Some(&format!("http://{api}"))).unwrap();

    let asset = resolve_latest_release(&octocrab, &UpstreamRepository::default())
        .await
        .unwrap();

    assert_eq!(asset.tag, "5.1.0");
    assert_eq!(asset.archive_url.as_str(), zipball);
}

#[tokio::test]
async fn release_without_zipball_is_missing_archive() {
    let api = spawn_github_api(59, release_json("5.1.0", None)).await;
    let octocrab = build_github_client(None, Some(&format!("http://{api}"))).unwrap();

    let result = resolve_latest_release(&octocrab, &UpstreamRepository::default()).await;

    match result {
        Err(FetchError::MissingArchive { repository, tag }) => {
            assert_eq!(repository, "hakimel/reveal.js");
            assert_eq!(tag, "5.1.0");
        }
        other => panic!("expected MissingArchive, got {other:?}"),
    }
}

#[tokio::test]
async fn exhausted_rate_limit_stops_before_lookup() {
    let zipball = "https://api.github.com/repos/hakimel/reveal.js/zipball/5.1.0";
    let api = spawn_github_api(0, release_json("5.1.0", Some(zipball))).await;
    let octocrab = build_github_client(None, Some(&format!("http://{api}"))).unwrap();

    let result = resolve_latest_release(&octocrab, &UpstreamRepository::default()).await;

    assert!(matches!(
        result,
        Err(FetchError::RateLimitExceeded {
            reset_at: 1_700_000_000
        })
    ));
}

#[test]
fn invalid_api_base_is_rejected() {
    let result = build_github_client(None, Some("not a uri"));
    assert!(matches!(result, Err(FetchError::GitHubError(_))));
}

#[tokio::test]
async fn init_fetches_extracts_and_scaffolds() {
    let host = spawn_archive_host(reveal_release_archive()).await;
    let zipball = format!("http://{host}/archive.zip");
    let api = spawn_github_api(59, release_json("5.1.0", Some(&zipball))).await;
    let temp = TempDir::new().unwrap();

    let config = InitConfig::new(
        temp.path().to_path_buf(),
        ScaffoldParams::new("Hi", "white", "deck.md"),
    )
    .with_api_base(format!("http://{api}"));
    let summary = Initializer::new(config).unwrap().run().await.unwrap();

    assert_eq!(summary.release_tag, "5.1.0");
    assert_eq!(summary.archive_url, zipball);
    assert_eq!(summary.extraction.files_written, 5);
    assert_eq!(
        fs::read_to_string(temp.path().join("deck.md")).unwrap(),
        "Hi"
    );
    let html = fs::read_to_string(temp.path().join("index.html")).unwrap();
    assert!(html.contains("css/theme/white.css"));

    let tree = list_tree(temp.path());
    assert!(tree.contains(&PathBuf::from("js/reveal.js")));
    assert!(tree.contains(&PathBuf::from("plugin/notes/notes.js")));
    assert!(!tree.contains(&PathBuf::from("README.md")));
    assert!(!tree.contains(&PathBuf::from("test")));
}

#[tokio::test]
async fn init_download_failure_leaves_root_untouched() {
    let host = spawn_archive_host(reveal_release_archive()).await;
    let zipball = format!("http://{host}/missing.zip");
    let api = spawn_github_api(59, release_json("5.1.0", Some(&zipball))).await;
    let temp = TempDir::new().unwrap();

    let config = InitConfig::new(temp.path().to_path_buf(), ScaffoldParams::default())
        .with_api_base(format!("http://{api}"));
    let result = Initializer::new(config).unwrap().run().await;

    assert!(matches!(
        result,
        Err(InitError::Fetch(FetchError::HttpStatus { .. }))
    ));
    assert!(list_tree(temp.path()).is_empty());
}
