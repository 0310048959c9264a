//! Error type shared by the parser, the manifest builder and the scanner.

use std::io;

/// Errors that abort a manifest build.
///
/// Route-id and URL conflicts are not errors; they are reported through
/// [`Diagnostics`](crate::Diagnostics) and resolved first-wins.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error(
        "Route segment \"{segment}\" for \"{route_id}\" cannot contain \"{character}\". \
         Escape it with [] if it is meant literally"
    )]
    InvalidSegment {
        route_id: String,
        segment: String,
        character: char,
    },

    #[error("Cannot add an empty route id to the prefix trie")]
    EmptyRouteId,

    #[error("Route file \"{file}\" is not inside the routes directory \"{root}\"")]
    OutsideRoot { file: String, root: String },

    #[error("Invalid ignore pattern \"{pattern}\": {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = RouteError> = std::result::Result<T, E>;
