/// Path utilities for route files
///
/// All functions are **pure** and work on `/`-separated strings so route
/// ids come out the same on every platform.

use std::borrow::Cow;

/// Converts `\` separators to `/`
///
/// Returns `Cow::Borrowed` when there is nothing to convert.
///
/// # Examples
///
/// ```
/// use rhtmx_flat_routes::path::normalize_slashes;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_slashes("app/routes"), Cow::Borrowed(_)));
/// assert_eq!(normalize_slashes("app\\routes\\users.tsx"), "app/routes/users.tsx");
/// ```
pub fn normalize_slashes(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Normalizes a directory path used as a routes root
///
/// Slashes are normalized and trailing `/` removed (except for `/` itself).
pub fn normalize_root(root: &str) -> String {
    let root = normalize_slashes(root);
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() && root.starts_with('/') {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Directory part of a `/`-separated path, `""` when there is none
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(pos) => &path[..pos],
        None => "",
    }
}

/// Extension of the final component including the dot (`.tsx`)
///
/// Dot files without a second dot (`.env`) have no extension.
pub fn extension(path: &str) -> Option<&str> {
    let name_start = path.rfind('/').map_or(0, |pos| pos + 1);
    let name = &path[name_start..];
    match name.rfind('.') {
        Some(0) | None => None,
        Some(pos) => Some(&name[pos..]),
    }
}

/// Removes the extension of the final component
///
/// ```
/// use rhtmx_flat_routes::path::strip_extension;
///
/// assert_eq!(strip_extension("users.$id.tsx"), "users.$id");
/// assert_eq!(strip_extension("about"), "about");
/// ```
pub fn strip_extension(path: &str) -> &str {
    match extension(path) {
        Some(ext) => &path[..path.len() - ext.len()],
        None => path,
    }
}

/// Path of `path` relative to `root`, or `None` when it lies outside
///
/// Both arguments must already be slash-normalized. The root itself maps to
/// `Some("")`.
pub fn relative_to<'a>(root: &str, path: &'a str) -> Option<&'a str> {
    if root.is_empty() || root == "." {
        return Some(path.strip_prefix("./").unwrap_or(path));
    }
    if root == "/" {
        return path.strip_prefix('/');
    }

    let rest = path.strip_prefix(root)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}
