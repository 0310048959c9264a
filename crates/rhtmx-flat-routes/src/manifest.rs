//! Route manifest types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry of the route manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRoute {
    /// Route module path relative to the routes directory
    pub file: String,
    /// Route id, unique within the manifest
    pub id: String,
    /// URL fragment relative to the parent route; `None` for layout-only routes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// `Some(true)` for index routes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl ConfigRoute {
    pub fn is_index(&self) -> bool {
        self.index.unwrap_or(false)
    }
}

/// Route id → route, ordered by id
///
/// Every `parent_id` refers to an id present in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteManifest {
    routes: BTreeMap<String, ConfigRoute>,
}

impl RouteManifest {
    pub(crate) fn from_routes(routes: BTreeMap<String, ConfigRoute>) -> Self {
        Self { routes }
    }

    pub fn get(&self, id: &str) -> Option<&ConfigRoute> {
        self.routes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.routes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigRoute)> {
        self.routes.iter().map(|(id, route)| (id.as_str(), route))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Routes without a parent
    pub fn roots(&self) -> impl Iterator<Item = &ConfigRoute> {
        self.routes.values().filter(|route| route.parent_id.is_none())
    }

    /// Direct children of `id`, ordered by id
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a ConfigRoute> + 'a {
        self.routes
            .values()
            .filter(move |route| route.parent_id.as_deref() == Some(id))
    }

    /// Absolute URL path of a route, joining the fragments of its ancestors
    ///
    /// ```
    /// use rhtmx_flat_routes::build_manifest;
    ///
    /// let manifest = build_manifest(
    ///     "app/routes",
    ///     &["app/routes/users.tsx", "app/routes/users.$id.tsx"],
    /// )
    /// .unwrap();
    /// assert_eq!(manifest.get("users.$id").unwrap().path.as_deref(), Some(":id"));
    /// assert_eq!(manifest.full_path("users.$id").as_deref(), Some("/users/:id"));
    /// ```
    pub fn full_path(&self, id: &str) -> Option<String> {
        let mut fragments = Vec::new();
        let mut current = self.routes.get(id)?;
        loop {
            if let Some(path) = current.path.as_deref() {
                fragments.push(path);
            }
            match current.parent_id.as_deref().and_then(|p| self.routes.get(p)) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        fragments.reverse();
        Some(format!("/{}", fragments.join("/")))
    }

    pub fn into_inner(self) -> BTreeMap<String, ConfigRoute> {
        self.routes
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a RouteManifest {
    type Item = (&'a String, &'a ConfigRoute);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ConfigRoute>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
