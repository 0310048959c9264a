/// URL path construction from parsed route segments
///
/// **Pure function**: same segments → same path, no side effects.

use super::segment::RouteSegments;

/// Builds the URL path a route id contributes, relative to the routes root
///
/// # Rules
///
/// - Index routes drop their last segment (`users._index` → `users`)
/// - Segments starting with `_` in both forms are pathless layouts and vanish
/// - Segments ending with `_` in both forms lose the trailing `_`, which
///   lets `users_.$id` escape the `users` layout while keeping `/users`
///
/// Returns `None` when no segment survives.
///
/// # Examples
///
/// ```
/// use rhtmx_flat_routes::route::{create_route_path, parse_route_segments};
///
/// let parsed = parse_route_segments("_auth.login").unwrap();
/// assert_eq!(create_route_path(&parsed, false).as_deref(), Some("login"));
///
/// let parsed = parse_route_segments("users_.$id").unwrap();
/// assert_eq!(create_route_path(&parsed, false).as_deref(), Some("users/:id"));
///
/// let parsed = parse_route_segments("_index").unwrap();
/// assert_eq!(create_route_path(&parsed, true), None);
/// ```
pub fn create_route_path(parsed: &RouteSegments, is_index: bool) -> Option<String> {
    let keep = if is_index {
        parsed.len().saturating_sub(1)
    } else {
        parsed.len()
    };

    let path = parsed
        .pairs()
        .take(keep)
        .filter(|(segment, raw)| !(segment.starts_with('_') && raw.starts_with('_')))
        .map(|(segment, raw)| {
            if segment.ends_with('_') && raw.ends_with('_') {
                &segment[..segment.len() - 1]
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    (!path.is_empty()).then_some(path)
}
