//! Helpers shared by the reqwest-backed adapters.

use reqwest::Url;

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Ensure `join` appends to the base path instead of replacing its last
/// segment.
pub(crate) fn as_directory(base: &Url) -> Url {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

/// Whitespace-compacted prefix of a response body for error messages.
pub(crate) fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn compacts_whitespace() {
        assert_eq!(
            body_preview(b"{\n  \"error\":  \"No face detected\"\n}"),
            "{ \"error\": \"No face detected\" }"
        );
    }

    #[rstest]
    fn truncates_long_bodies() {
        let body = "x".repeat(PREVIEW_CHAR_LIMIT + 20);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), PREVIEW_CHAR_LIMIT + 3);
        assert!(preview.ends_with("..."));
    }

    #[rstest]
    #[case("http://gw/face-api", "http://gw/face-api/")]
    #[case("http://gw/face-api/", "http://gw/face-api/")]
    #[case("http://gw", "http://gw/")]
    fn as_directory_adds_one_trailing_slash(#[case] raw: &str, #[case] expected: &str) {
        let url = Url::parse(raw).expect("url");
        assert_eq!(as_directory(&url).as_str(), expected);
    }

    #[rstest]
    fn empty_body_stays_empty() {
        assert_eq!(body_preview(b"  \n"), "");
    }
}
