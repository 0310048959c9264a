//! Route conflicts and where they get reported.
//!
//! Conflicts never fail a build. The first route wins, the others are left
//! out of the manifest and a [`Conflict`] is handed to a [`Diagnostics`]
//! sink.

use std::fmt;

/// A set of route files competing for the same id or URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// Several files map to the same route id (`users.tsx` and `users/route.tsx`)
    RouteId { route_id: String, files: Vec<String> },
    /// Several routes resolve to the same URL path
    UrlPath { pathname: String, files: Vec<String> },
}

impl Conflict {
    /// File that was kept
    pub fn winner(&self) -> &str {
        self.files().first().map_or("", String::as_str)
    }

    /// Files that were dropped
    pub fn losers(&self) -> &[String] {
        self.files().get(1..).unwrap_or_default()
    }

    pub fn files(&self) -> &[String] {
        match self {
            Self::RouteId { files, .. } | Self::UrlPath { files, .. } => files,
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, key, what) = match self {
            Self::RouteId { route_id, .. } => ("Route ID", route_id.clone(), "Route ID"),
            Self::UrlPath { pathname, .. } => {
                let pathname = if pathname.starts_with('/') {
                    pathname.clone()
                } else {
                    format!("/{pathname}")
                };
                ("Route Path", pathname, "URL")
            }
        };

        writeln!(f, "Route conflict: {kind} Collision: \"{key}\"")?;
        writeln!(f)?;
        writeln!(
            f,
            "The following routes all define the same {what}, only the first one will be used"
        )?;
        writeln!(f)?;
        writeln!(f, "  kept:    {}", self.winner())?;
        for loser in self.losers() {
            writeln!(f, "  ignored: {loser}")?;
        }
        Ok(())
    }
}

/// Receives conflicts found while scanning and building
pub trait Diagnostics {
    fn conflict(&mut self, conflict: Conflict);
}

/// Logs every conflict with `tracing::warn!`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn conflict(&mut self, conflict: Conflict) {
        tracing::warn!(winner = conflict.winner(), "{conflict}");
    }
}

/// Keeps conflicts in memory for later inspection
#[derive(Debug, Default, Clone)]
pub struct CollectedDiagnostics {
    pub conflicts: Vec<Conflict>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn route_id_conflicts(&self) -> impl Iterator<Item = &Conflict> {
        self.conflicts
            .iter()
            .filter(|c| matches!(c, Conflict::RouteId { .. }))
    }

    pub fn url_conflicts(&self) -> impl Iterator<Item = &Conflict> {
        self.conflicts
            .iter()
            .filter(|c| matches!(c, Conflict::UrlPath { .. }))
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn conflict(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }
}
