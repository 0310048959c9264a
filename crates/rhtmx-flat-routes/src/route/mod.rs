/// Route id parsing for flat-file routes
///
/// Contains the pure components that turn a route id into URL path pieces:
/// - `segment` - the escape/optional/parameter state machine
/// - `path` - layout and index rules that produce the URL fragment

pub mod path;
pub mod segment;

pub use path::create_route_path;
pub use segment::{is_segment_separator, parse_route_segments, RouteSegments};
