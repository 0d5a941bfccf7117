/// Utility helpers for miniplayer

/// Percent-encode every segment of a relative asset path, keeping the `/`
/// separators intact.
pub fn encode_path_segments<S: AsRef<str>>(path: S) -> String {
    path.as_ref()
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Prefix a relative asset path with the public base path.
/// The base may be a bare path (`/`, `/app`, `/app/`) or an absolute URL;
/// exactly one `/` ends up between the two parts.
pub fn join_public_path(base: &str, path: &str) -> String {
    let base = base.trim();
    let base = if base.is_empty() { "/" } else { base };
    let path = encode_path_segments(path.trim_start_matches('/'));

    if base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Normalize a configured base path so it always ends with `/`.
pub fn normalize_base_path<S: AsRef<str>>(base: S) -> String {
    let trimmed = base.as_ref().trim();
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}
