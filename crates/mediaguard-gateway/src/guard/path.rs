/// Turn the request URI path (already stripped of the mount prefix) into the
/// policy path: percent-decoded, no leading slash.
///
/// Returns `None` for anything that is not a plain relative file path: empty
/// paths, `.`/`..`/empty segments, backslashes, NUL, or invalid UTF-8.
/// Policies are matched against the decoded form, which is what the file
/// service resolves, so encoded prefixes cannot slip past a rule.
pub fn media_path(uri_path: &str) -> Option<String> {
    let raw = uri_path.strip_prefix('/').unwrap_or(uri_path);
    let decoded = urlencoding::decode(raw).ok()?;

    if decoded.is_empty() || decoded.contains(['\\', '\0']) {
        return None;
    }
    if decoded
        .split('/')
        .any(|seg| seg.is_empty() || seg == "." || seg == "..")
    {
        return None;
    }

    Some(decoded.into_owned())
}
