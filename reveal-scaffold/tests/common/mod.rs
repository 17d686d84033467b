#![allow(dead_code)]

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::fs;
use std::io::{Cursor, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const ROOT_PREFIX: &str = "hakimel-reveal.js-5b1c2e7/";

/// Builds an in-memory zip; `None` content marks a directory entry.
pub fn build_archive(entries: &[(&str, Option<&[u8]>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, content) in entries {
        match content {
            None => writer.add_directory(*name, options).unwrap(),
            Some(bytes) => {
                writer.start_file(*name, options).unwrap();
                writer.write_all(bytes).unwrap();
            }
        }
    }
    writer.finish().unwrap().into_inner()
}

/// A zipball laid out like a reveal.js release.
pub fn reveal_release_archive() -> Vec<u8> {
    let font: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    build_archive(&[
        (ROOT_PREFIX, None),
        ("hakimel-reveal.js-5b1c2e7/.gitignore", Some(b"node_modules")),
        ("hakimel-reveal.js-5b1c2e7/README.md", Some(b"# reveal.js")),
        ("hakimel-reveal.js-5b1c2e7/index.html", Some(b"<html>demo</html>")),
        ("hakimel-reveal.js-5b1c2e7/css/", None),
        ("hakimel-reveal.js-5b1c2e7/css/reveal.css", Some(b".reveal {}")),
        ("hakimel-reveal.js-5b1c2e7/css/theme/", None),
        ("hakimel-reveal.js-5b1c2e7/css/theme/white.css", Some(b"body { background: #fff; }")),
        ("hakimel-reveal.js-5b1c2e7/js/", None),
        ("hakimel-reveal.js-5b1c2e7/js/reveal.js", Some(b"var Reveal = {};")),
        ("hakimel-reveal.js-5b1c2e7/lib/", None),
        ("hakimel-reveal.js-5b1c2e7/lib/font/", None),
        ("hakimel-reveal.js-5b1c2e7/lib/font/league.woff", Some(font.as_slice())),
        ("hakimel-reveal.js-5b1c2e7/plugin/", None),
        ("hakimel-reveal.js-5b1c2e7/plugin/notes/", None),
        ("hakimel-reveal.js-5b1c2e7/plugin/notes/notes.js", Some(b"// notes")),
        ("hakimel-reveal.js-5b1c2e7/test/", None),
        ("hakimel-reveal.js-5b1c2e7/test/test.js", Some(b"QUnit.test();")),
    ])
}

/// Lists every file and directory under `root`, relative to it.
pub fn list_tree(root: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    collect(root, root, &mut paths);
    paths.sort();
    paths
}

fn collect(root: &Path, dir: &Path, paths: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        paths.push(path.strip_prefix(root).unwrap().to_path_buf());
        if path.is_dir() {
            collect(root, &path, paths);
        }
    }
}

/// Serves `router` on an ephemeral local port.
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Serves the release archive at `/archive.zip` and a 404 at `/missing.zip`.
pub async fn spawn_archive_host(archive: Vec<u8>) -> SocketAddr {
    let router = Router::new()
        .route(
            "/archive.zip",
            get(move || {
                let archive = archive.clone();
                async move { archive }
            }),
        )
        .route(
            "/missing.zip",
            get(|| async { (StatusCode::NOT_FOUND, "Not Found") }),
        );
    spawn_router(router).await
}

fn rate(remaining: usize) -> Value {
    json!({ "limit": 60, "used": 60 - remaining, "remaining": remaining, "reset": 1_700_000_000u64 })
}

/// Minimal `GET /repos/{owner}/{repo}/releases/latest` body.
pub fn release_json(tag: &str, zipball_url: Option<&str>) -> Value {
    let api = "https://api.github.com/repos/hakimel/reveal.js";
    json!({
        "url": format!("{api}/releases/1"),
        "html_url": format!("https://github.com/hakimel/reveal.js/releases/tag/{tag}"),
        "assets_url": format!("{api}/releases/1/assets"),
        "upload_url": "https://uploads.github.com/repos/hakimel/reveal.js/releases/1/assets{?name,label}",
        "tarball_url": null,
        "zipball_url": zipball_url,
        "id": 1,
        "node_id": "RE_1",
        "tag_name": tag,
        "target_commitish": "master",
        "name": tag,
        "body": null,
        "draft": false,
        "prerelease": false,
        "created_at": "2024-01-01T00:00:00Z",
        "published_at": "2024-01-01T00:00:00Z",
        "author": null,
        "assets": []
    })
}

/// Installs the process-wide TLS provider the binary uses; the GitHub client
/// needs one once several rustls backends are linked in.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

/// Stands in for the GitHub REST API: the rate limit and the latest release
/// of hakimel/reveal.js.
pub async fn spawn_github_api(remaining: usize, release: Value) -> SocketAddr {
    install_crypto_provider();
    let router = Router::new()
        .route(
            "/rate_limit",
            get(move || async move {
                Json(json!({
                    "resources": { "core": rate(remaining), "search": rate(remaining) },
                    "rate": rate(remaining)
                }))
            }),
        )
        .route(
            "/repos/hakimel/reveal.js/releases/latest",
            get(move || {
                let release = release.clone();
                async move { Json(release) }
            }),
        );
    spawn_router(router).await
}
