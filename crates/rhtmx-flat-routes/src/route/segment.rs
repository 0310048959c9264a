/// Segment parsing for flat route ids
///
/// Turns a route id such as `users.$id.(edit)` into parallel lists of
/// transformed segments (`users`, `:id`, `edit?`) and raw segments
/// (`users`, `$id`, `(edit)`). The raw form keeps every marker so later
/// stages can tell a written `_` apart from one produced by escaping.

use crate::error::{Result, RouteError};

/// Marks a dynamic parameter (`$id`) or, at the very end of an id, a splat.
pub const PARAM_PREFIX: char = '$';
pub const ESCAPE_START: char = '[';
pub const ESCAPE_END: char = ']';
pub const OPTIONAL_START: char = '(';
pub const OPTIONAL_END: char = ')';

/// Characters that split a route id into segments
///
/// `\` is accepted so ids built from Windows paths parse the same way.
pub fn is_segment_separator(c: char) -> bool {
    matches!(c, '/' | '.' | '\\')
}

/// Parsed segments of one route id
///
/// `segments[i]` and `raw[i]` always describe the same segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSegments {
    /// Segments with markers translated (`$id` → `:id`, `(a)` → `a?`)
    pub segments: Vec<String>,
    /// Segments exactly as written in the id
    pub raw: Vec<String>,
}

impl RouteSegments {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates `(transformed, raw)` pairs in order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.segments
            .iter()
            .map(String::as_str)
            .zip(self.raw.iter().map(String::as_str))
    }

    /// Last segment as written, used for the `_index` and pathless checks
    pub fn last_raw(&self) -> Option<&str> {
        self.raw.last().map(String::as_str)
    }

    /// Whether the id names an index route (`parent._index`)
    pub fn is_index(&self) -> bool {
        self.last_raw() == Some("_index")
    }

    /// Whether the id names a pathless layout (`_auth`, `users._layout`)
    pub fn is_pathless_layout(&self) -> bool {
        self.last_raw()
            .is_some_and(|raw| raw.starts_with('_') && raw != "_index")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Escape,
    Optional,
    OptionalEscape,
}

/// Accumulates the segment currently being read
struct Pending<'a> {
    route_id: &'a str,
    segment: String,
    raw: String,
    out: RouteSegments,
}

impl<'a> Pending<'a> {
    fn new(route_id: &'a str) -> Self {
        Self {
            route_id,
            segment: String::new(),
            raw: String::new(),
            out: RouteSegments::default(),
        }
    }

    fn push(&mut self, c: char) {
        self.segment.push(c);
        self.raw.push(c);
    }

    fn push_raw(&mut self, c: char) {
        self.raw.push(c);
    }

    /// `$` opening a segment: splat when it ends the id, parameter otherwise
    fn push_param(&mut self, ends_id: bool) {
        self.segment.push(if ends_id { '*' } else { ':' });
        self.raw.push(PARAM_PREFIX);
    }

    fn flush(&mut self) -> Result<()> {
        let segment = std::mem::take(&mut self.segment);
        let raw = std::mem::take(&mut self.raw);
        if segment.is_empty() {
            return Ok(());
        }

        // The raw form holds `$` where `:`/`*` were synthesized, so any
        // `:`/`*` found there was written literally.
        let invalid = [('*', &raw), (':', &raw), ('/', &segment)]
            .into_iter()
            .find(|(c, s)| s.contains(*c));
        if let Some((character, offending)) = invalid {
            return Err(RouteError::InvalidSegment {
                route_id: self.route_id.to_string(),
                segment: offending.clone(),
                character,
            });
        }

        self.out.segments.push(segment);
        self.out.raw.push(raw);
        Ok(())
    }
}

/// Splits a route id into transformed and raw segments
///
/// # Rules
///
/// - `.`, `/` and `\` separate segments; empty segments are dropped
/// - `$` starting a segment becomes `:` (or `*` when it is the last
///   character of the id)
/// - `[...]` copies its content verbatim, separators included
/// - `(...)` marks the segment optional by appending `?`
///
/// # Errors
///
/// [`RouteError::InvalidSegment`] when a segment contains a literal `*`,
/// `:` or `/`.
///
/// # Examples
///
/// ```
/// use rhtmx_flat_routes::route::parse_route_segments;
///
/// let parsed = parse_route_segments("users.$id.(edit)").unwrap();
/// assert_eq!(parsed.segments, vec!["users", ":id", "edit?"]);
/// assert_eq!(parsed.raw, vec!["users", "$id", "(edit)"]);
///
/// let parsed = parse_route_segments("files.$").unwrap();
/// assert_eq!(parsed.segments, vec!["files", "*"]);
/// ```
pub fn parse_route_segments(route_id: &str) -> Result<RouteSegments> {
    let mut pending = Pending::new(route_id);
    let mut state = State::Normal;
    let mut chars = route_id.chars().peekable();

    while let Some(c) = chars.next() {
        let ends_id = chars.peek().is_none();

        state = match state {
            State::Normal => {
                if is_segment_separator(c) {
                    pending.flush()?;
                    State::Normal
                } else if c == ESCAPE_START {
                    pending.push_raw(c);
                    State::Escape
                } else if c == OPTIONAL_START {
                    pending.push_raw(c);
                    State::Optional
                } else if pending.segment.is_empty() && c == PARAM_PREFIX {
                    pending.push_param(ends_id);
                    State::Normal
                } else {
                    pending.push(c);
                    State::Normal
                }
            }
            State::Escape => {
                if c == ESCAPE_END {
                    pending.push_raw(c);
                    State::Normal
                } else {
                    pending.push(c);
                    State::Escape
                }
            }
            State::Optional => {
                if is_segment_separator(c) {
                    pending.flush()?;
                    State::Optional
                } else if c == OPTIONAL_END {
                    pending.segment.push('?');
                    pending.push_raw(c);
                    State::Normal
                } else if c == ESCAPE_START {
                    pending.push_raw(c);
                    State::OptionalEscape
                } else if pending.segment.is_empty() && c == PARAM_PREFIX {
                    pending.push_param(ends_id);
                    State::Optional
                } else {
                    pending.push(c);
                    State::Optional
                }
            }
            State::OptionalEscape => {
                if c == ESCAPE_END {
                    pending.push_raw(c);
                    State::Optional
                } else {
                    pending.push(c);
                    State::OptionalEscape
                }
            }
        };
    }

    pending.flush()?;
    Ok(pending.out)
}
