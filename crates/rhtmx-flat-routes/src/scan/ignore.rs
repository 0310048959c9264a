//! Glob patterns for route files that should not become routes.

use glob::Pattern;

use crate::error::{Result, RouteError};

/// Always ignored: dot files and dot folders
pub const DEFAULT_IGNORE: &str = "**/.*";

/// Compiled set of ignore globs
///
/// ```
/// use rhtmx_flat_routes::IgnorePatterns;
///
/// let ignore = IgnorePatterns::new(["**/*.css", "*.test.tsx"]).unwrap();
/// assert!(ignore.is_ignored("styles.css"));
/// assert!(ignore.is_ignored("users.test.tsx"));
/// assert!(ignore.is_ignored(".DS_Store"));
/// assert!(!ignore.is_ignored("users.tsx"));
/// ```
#[derive(Debug, Clone)]
pub struct IgnorePatterns {
    patterns: Vec<Pattern>,
}

impl IgnorePatterns {
    /// Compiles `patterns` plus [`DEFAULT_IGNORE`], dropping duplicates
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidIgnorePattern`] for a malformed glob.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sources: Vec<String> = vec![DEFAULT_IGNORE.to_string()];
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if !sources.iter().any(|s| s == pattern) {
                sources.push(pattern.to_string());
            }
        }

        let patterns = sources
            .into_iter()
            .map(|source| {
                Pattern::new(&source).map_err(|source_err| RouteError::InvalidIgnorePattern {
                    pattern: source.clone(),
                    source: source_err,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Whether a path relative to the routes directory is ignored
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(relative_path))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignores_dot_files() {
        let ignore = IgnorePatterns::new(Vec::<String>::new()).unwrap();
        assert!(ignore.is_ignored(".DS_Store"));
        assert!(ignore.is_ignored(".hidden"));
        assert!(!ignore.is_ignored("users.tsx"));
    }

    #[test]
    fn test_duplicates_dropped() {
        let ignore = IgnorePatterns::new(["**/.*", "*.css", "*.css"]).unwrap();
        assert_eq!(ignore.patterns().collect::<Vec<_>>(), vec!["**/.*", "*.css"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = IgnorePatterns::new(["a**b"]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidIgnorePattern { ref pattern, .. } if pattern == "a**b"));
    }
}
