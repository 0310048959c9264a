//! Manifest construction from an already-listed set of route files.
//!
//! This is the pure half of the compiler: no file system access, just
//! strings in and a [`RouteManifest`] out.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::collate::RouteCollator;
use crate::conflict::{Conflict, Diagnostics};
use crate::error::{Result, RouteError};
use crate::manifest::{ConfigRoute, RouteManifest};
use crate::path::{normalize_root, normalize_slashes, parent_dir, relative_to, strip_extension};
use crate::route::{create_route_path, parse_route_segments, RouteSegments};
use crate::trie::PrefixTrie;

/// A route while the manifest is being assembled
#[derive(Debug)]
struct Draft {
    id: String,
    file: String,
    segments: RouteSegments,
    index: bool,
    /// URL path relative to the routes root
    absolute: Option<String>,
    parent: Option<usize>,
}

/// Builds route manifests; owns the ordering used for first-wins resolution
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    collator: RouteCollator,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collator(collator: RouteCollator) -> Self {
        Self { collator }
    }

    /// Builds the manifest for `files`, all located under `routes_root`
    ///
    /// Files directly in the root name their route with their own stem
    /// (`routes/users.$id.tsx` → `users.$id`). Files one level down are
    /// folder routes named after their folder (`routes/users/route.tsx` →
    /// `users`).
    ///
    /// Conflicts are passed to `diagnostics` and resolved in favour of the
    /// file that sorts first.
    ///
    /// # Errors
    ///
    /// - [`RouteError::OutsideRoot`] for a file not under `routes_root`
    /// - [`RouteError::InvalidSegment`] for an id with a literal `*`, `:` or `/`
    pub fn build<I, D>(&self, routes_root: &str, files: I, diagnostics: &mut D) -> Result<RouteManifest>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        D: Diagnostics + ?Sized,
    {
        let root = normalize_root(routes_root);
        let mut files: Vec<String> = files
            .into_iter()
            .map(|file| normalize_slashes(file.as_ref()).into_owned())
            .collect();
        self.collator.sort(&mut files);

        let (mut drafts, id_conflicts) = collect_unique_ids(&root, &files)?;
        resolve_parents(&mut drafts)?;
        let (removed, url_conflicts) = find_url_conflicts(&drafts);
        reattach_orphans(&mut drafts, &removed);

        let manifest = relativize(&drafts, &removed);

        for conflict in id_conflicts.into_iter().chain(url_conflicts) {
            diagnostics.conflict(conflict);
        }

        tracing::debug!(
            root = %root,
            routes = manifest.len(),
            removed = removed.len(),
            "built route manifest"
        );
        Ok(manifest)
    }
}

/// Route id for a file: its stem when it sits in the root, else its folder
fn route_id_for<'a>(root: &str, file: &'a str) -> Result<(&'a str, &'a str)> {
    let relative = relative_to(root, file)
        .filter(|relative| !relative.is_empty())
        .ok_or_else(|| RouteError::OutsideRoot {
            file: file.to_string(),
            root: root.to_string(),
        })?;

    let id = match parent_dir(relative) {
        "" => strip_extension(relative),
        dir => dir,
    };
    Ok((id, relative))
}

/// Step 1: derive ids, keep the first file per id
fn collect_unique_ids(root: &str, files: &[String]) -> Result<(Vec<Draft>, Vec<Conflict>)> {
    let mut drafts: Vec<Draft> = Vec::new();
    let mut by_id: HashMap<&str, usize> = HashMap::new();
    let mut conflicts: Vec<Conflict> = Vec::new();
    let mut conflict_by_id: HashMap<&str, usize> = HashMap::new();

    for file in files {
        let (id, relative) = route_id_for(root, file)?;

        if let Some(first) = by_id.get(id).copied() {
            match conflict_by_id.get(id).copied() {
                Some(at) => {
                    if let Conflict::RouteId { files, .. } = &mut conflicts[at] {
                        files.push(relative.to_string());
                    }
                }
                None => {
                    conflict_by_id.insert(id, conflicts.len());
                    conflicts.push(Conflict::RouteId {
                        route_id: id.to_string(),
                        files: vec![drafts[first].file.clone(), relative.to_string()],
                    });
                }
            }
            continue;
        }

        let segments = parse_route_segments(id)?;
        by_id.insert(id, drafts.len());
        drafts.push(Draft {
            id: id.to_string(),
            file: relative.to_string(),
            index: segments.is_index(),
            absolute: None,
            segments,
            parent: None,
        });
    }

    Ok((drafts, conflicts))
}

/// Step 2: attach every route to its nearest ancestor
///
/// Longest ids go first, so by the time an id claims the stored ids below it,
/// every closer ancestor has already claimed (and removed) its own.
fn resolve_parents(drafts: &mut [Draft]) -> Result<()> {
    let mut order: Vec<usize> = (0..drafts.len()).collect();
    order.sort_by(|&a, &b| drafts[b].id.len().cmp(&drafts[a].id.len()));

    let by_id: HashMap<String, usize> = drafts
        .iter()
        .enumerate()
        .map(|(i, draft)| (draft.id.clone(), i))
        .collect();

    let mut trie = PrefixTrie::new();
    for &i in &order {
        let draft = &mut drafts[i];
        draft.absolute = create_route_path(&draft.segments, draft.index);

        let id = draft.id.clone();
        let children = trie.find_and_remove(&id, |value| is_namespace_child(&id, value));
        for child in children {
            if let Some(&child) = by_id.get(&child) {
                drafts[child].parent = Some(i);
            }
        }

        trie.add(&id)?;
    }
    Ok(())
}

/// Step 3: first route per (URL, index) wins, later ones are removed
///
/// Visits routes in collated file order. Pathless layouts and plain layouts
/// without a path never collide: sharing a level is what they are for.
fn find_url_conflicts(drafts: &[Draft]) -> (HashSet<usize>, Vec<Conflict>) {
    let mut claimed: HashMap<(&str, bool), usize> = HashMap::new();
    let mut conflicts: Vec<Conflict> = Vec::new();
    let mut conflict_by_key: HashMap<(&str, bool), usize> = HashMap::new();
    let mut removed = HashSet::new();

    for (i, draft) in drafts.iter().enumerate() {
        let pathname = draft.absolute.as_deref().unwrap_or("");
        if draft.segments.is_pathless_layout() || (pathname.is_empty() && !draft.index) {
            continue;
        }

        let key = (pathname, draft.index);
        let first = match claimed.get(&key).copied() {
            Some(first) => first,
            None => {
                claimed.insert(key, i);
                continue;
            }
        };

        removed.insert(i);
        match conflict_by_key.get(&key).copied() {
            Some(at) => {
                if let Conflict::UrlPath { files, .. } = &mut conflicts[at] {
                    files.push(draft.file.clone());
                }
            }
            None => {
                conflict_by_key.insert(key, conflicts.len());
                conflicts.push(Conflict::UrlPath {
                    pathname: pathname.to_string(),
                    files: vec![drafts[first].file.clone(), draft.file.clone()],
                });
            }
        }
    }

    (removed, conflicts)
}

/// Children of removed routes move up to the nearest surviving ancestor
fn reattach_orphans(drafts: &mut [Draft], removed: &HashSet<usize>) {
    for i in 0..drafts.len() {
        let mut parent = drafts[i].parent;
        while let Some(p) = parent.filter(|p| removed.contains(p)) {
            parent = drafts[p].parent;
        }
        drafts[i].parent = parent;
    }
}

/// Step 4: turn root-relative paths into parent-relative ones
fn relativize(drafts: &[Draft], removed: &HashSet<usize>) -> RouteManifest {
    let mut order: Vec<usize> = (0..drafts.len()).filter(|i| !removed.contains(i)).collect();
    order.sort_by_key(|&i| drafts[i].id.len());

    let mut routes = BTreeMap::new();
    for i in order {
        let draft = &drafts[i];
        let parent = draft.parent.map(|p| &drafts[p]);

        let path = match (draft.absolute.as_deref(), parent.and_then(|p| p.absolute.as_deref())) {
            (Some(own), Some(parent_path)) => {
                let rest = own.strip_prefix(parent_path).unwrap_or(own);
                let rest = rest.strip_prefix('/').unwrap_or(rest);
                let rest = rest.strip_suffix('/').unwrap_or(rest);
                (!rest.is_empty()).then(|| rest.to_string())
            }
            (own, _) => own.map(str::to_string),
        };

        routes.insert(
            draft.id.clone(),
            ConfigRoute {
                file: draft.file.clone(),
                id: draft.id.clone(),
                path,
                index: draft.index.then_some(true),
                parent_id: parent.map(|p| p.id.clone()),
            },
        );
    }

    RouteManifest::from_routes(routes)
}

/// Whether `value` lives in `id`'s namespace rather than merely sharing its
/// first characters (`users.$id` does, `users2` does not)
fn is_namespace_child(id: &str, value: &str) -> bool {
    value
        .strip_prefix(id)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| matches!(c, '.' | '/'))
}
