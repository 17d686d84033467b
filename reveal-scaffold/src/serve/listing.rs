//! Directory index for folders without an `index.html`.

use crate::extract::sanitize;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Characters escaped in listing links; `/` stays so directories keep their slash.
const HREF: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Lists the directory addressed by `uri` under `root`, or answers 404.
pub async fn directory_index(State(root): State<PathBuf>, uri: Uri) -> Response {
    let Some(dir) = resolve(&root, uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match list_entries(&dir).await {
        Ok(names) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            render_listing(&names),
        )
            .into_response(),
        Err(e) => {
            debug!(path = %dir.display(), error = %e, "No directory to list");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Maps a request path onto a directory under `root`.
///
/// Returns `None` for paths that are not valid UTF-8 once decoded or that
/// would leave `root`.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
    let relative = decoded.trim_start_matches('/');
    if relative.trim_end_matches('/').is_empty() {
        return Some(root.to_path_buf());
    }
    sanitize(relative).map(|path| root.join(path))
}

/// Entry names of `dir`, sorted, directories suffixed with `/`.
async fn list_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

fn render_listing(names: &[String]) -> String {
    let mut html = String::from("<!doctype html>\n<meta charset=\"utf-8\">\n<pre>\n");
    for name in names {
        html.push_str(&format!(
            "<a href=\"{}\">{}</a>\n",
            utf8_percent_encode(name, HREF),
            handlebars::html_escape(name)
        ));
    }
    html.push_str("</pre>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_under_root() {
        let root = Path::new("/srv/deck");

        assert_eq!(resolve(root, "/"), Some(root.to_path_buf()));
        assert_eq!(resolve(root, "/js/"), Some(root.join("js")));
        assert_eq!(
            resolve(root, "/plugin/my%20notes/"),
            Some(root.join("plugin/my notes"))
        );
    }

    #[test]
    fn refuses_escapes() {
        let root = Path::new("/srv/deck");

        assert_eq!(resolve(root, "/js/../../etc/"), None);
        assert_eq!(resolve(root, "/%2e%2e/"), None);
    }

    #[test]
    fn listing_links_and_escapes_names() {
        let html = render_listing(&[
            "a&b.js".to_string(),
            "my notes/".to_string(),
            "reveal.js".to_string(),
        ]);

        assert!(html.contains(r#"<a href="reveal.js">reveal.js</a>"#));
        assert!(html.contains(r#"<a href="my%20notes/">my notes/</a>"#));
        assert!(html.contains("a&amp;b.js</a>"));
    }

    #[tokio::test]
    async fn lists_sorted_with_directory_suffix() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("reveal.js"), "x").unwrap();
        fs::create_dir(temp.path().join("font")).unwrap();
        fs::write(temp.path().join("a.css"), "x").unwrap();

        let names = list_entries(temp.path()).await.unwrap();

        assert_eq!(names, ["a.css", "font/", "reveal.js"]);
    }

    #[tokio::test]
    async fn missing_directory_is_not_found() {
        let temp = TempDir::new().unwrap();
        let response = directory_index(
            State(temp.path().to_path_buf()),
            Uri::from_static("/absent/"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
