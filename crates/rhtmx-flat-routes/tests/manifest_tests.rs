//! Integration tests for manifest building
//!
//! Everything here goes through the pure entry points, so no file system
//! is touched. Tests are organized by feature area:
//! - Route ids and nesting
//! - URL paths (params, splats, optional, escaping, layouts, index routes)
//! - Conflict resolution
//! - Determinism and errors

use pretty_assertions::assert_eq;
use rhtmx_flat_routes::*;
use rstest::rstest;

const ROOT: &str = "app/routes";

fn build(files: &[&str]) -> (RouteManifest, CollectedDiagnostics) {
    let mut diagnostics = CollectedDiagnostics::new();
    let manifest = ManifestBuilder::new()
        .build(ROOT, files.iter().map(|f| format!("{ROOT}/{f}")), &mut diagnostics)
        .unwrap();
    (manifest, diagnostics)
}

fn parent_of<'a>(manifest: &'a RouteManifest, id: &str) -> Option<&'a str> {
    manifest.get(id).unwrap().parent_id.as_deref()
}

fn path_of<'a>(manifest: &'a RouteManifest, id: &str) -> Option<&'a str> {
    manifest.get(id).unwrap().path.as_deref()
}

// ============================================================================
// Route Ids and Nesting
// ============================================================================

#[test]
fn test_flat_file_and_folder_ids() {
    let (manifest, _) = build(&["about.tsx", "blog/route.tsx", "docs/index.mdx"]);

    assert_eq!(manifest.ids().collect::<Vec<_>>(), vec!["about", "blog", "docs"]);
    assert_eq!(manifest.get("blog").unwrap().file, "blog/route.tsx");
    assert_eq!(manifest.get("docs").unwrap().file, "docs/index.mdx");
    assert_eq!(manifest.get("docs").unwrap().index, None);
}

#[rstest]
#[case(&["a.tsx", "a.b.tsx", "a.b.c.tsx", "a.x.tsx"])]
#[case(&["a.b.c.tsx", "a.x.tsx", "a.b.tsx", "a.tsx"])]
#[case(&["a.x.tsx", "a.tsx", "a.b.c.tsx", "a.b.tsx"])]
fn test_nearest_ancestor_in_any_order(#[case] files: &[&str]) {
    let (manifest, _) = build(files);

    assert_eq!(parent_of(&manifest, "a"), None);
    assert_eq!(parent_of(&manifest, "a.b"), Some("a"));
    assert_eq!(parent_of(&manifest, "a.b.c"), Some("a.b"));
    assert_eq!(parent_of(&manifest, "a.x"), Some("a"));
}

#[test]
fn test_missing_intermediate_skips_to_grandparent() {
    let (manifest, _) = build(&["a.tsx", "a.b.c.tsx"]);
    assert_eq!(parent_of(&manifest, "a.b.c"), Some("a"));
    assert_eq!(path_of(&manifest, "a.b.c"), Some("b/c"));
}

#[test]
fn test_string_prefix_is_not_a_parent() {
    let (manifest, _) = build(&["users.tsx", "users2.detail.tsx", "usersettings.tsx"]);
    assert_eq!(parent_of(&manifest, "users2.detail"), None);
    assert_eq!(parent_of(&manifest, "usersettings"), None);

    let (manifest, _) = build(&["users.tsx", "users2.tsx", "users2.detail.tsx"]);
    assert_eq!(parent_of(&manifest, "users2.detail"), Some("users2"));
    assert_eq!(parent_of(&manifest, "users2"), None);
}

#[test]
fn test_folder_route_parents_flat_children() {
    let (manifest, _) = build(&["blog/route.tsx", "blog.$slug.tsx"]);
    assert_eq!(parent_of(&manifest, "blog.$slug"), Some("blog"));
    assert_eq!(path_of(&manifest, "blog.$slug"), Some(":slug"));
}

// ============================================================================
// URL Paths
// ============================================================================

#[test]
fn test_full_app_layout() {
    let (manifest, diagnostics) = build(&[
        "_index.tsx",
        "about.tsx",
        "users.tsx",
        "users._index.tsx",
        "users.$id.tsx",
        "users_.$id.edit.tsx",
        "_auth.tsx",
        "_auth.login.tsx",
        "files.$.tsx",
        "[sitemap.xml].tsx",
    ]);
    assert!(diagnostics.is_empty());
    assert_eq!(manifest.len(), 10);

    let index = manifest.get("_index").unwrap();
    assert_eq!(index.path, None);
    assert_eq!(index.index, Some(true));
    assert_eq!(index.parent_id, None);

    assert_eq!(path_of(&manifest, "about"), Some("about"));
    assert_eq!(path_of(&manifest, "users.$id"), Some(":id"));
    assert_eq!(parent_of(&manifest, "users.$id"), Some("users"));

    // `users_` opts out of the users layout but keeps the /users prefix
    assert_eq!(parent_of(&manifest, "users_.$id.edit"), None);
    assert_eq!(path_of(&manifest, "users_.$id.edit"), Some("users/:id/edit"));

    assert_eq!(path_of(&manifest, "_auth"), None);
    assert_eq!(parent_of(&manifest, "_auth.login"), Some("_auth"));
    assert_eq!(path_of(&manifest, "_auth.login"), Some("login"));
    assert_eq!(manifest.full_path("_auth.login").as_deref(), Some("/login"));

    assert_eq!(path_of(&manifest, "files.$"), Some("files/*"));
    assert_eq!(path_of(&manifest, "[sitemap.xml]"), Some("sitemap.xml"));
}

#[test]
fn test_index_route_collapses_into_parent() {
    let (manifest, _) = build(&["profile.tsx", "profile._index.tsx"]);

    let index = manifest.get("profile._index").unwrap();
    assert_eq!(index.index, Some(true));
    assert_eq!(index.path, None);
    assert_eq!(index.parent_id.as_deref(), Some("profile"));
    assert_eq!(manifest.full_path("profile._index"), manifest.full_path("profile"));
    assert_eq!(manifest.full_path("profile").as_deref(), Some("/profile"));
}

#[rstest]
#[case("users.$id.tsx", "users/:id")]
#[case("$lang.docs.$.tsx", ":lang/docs/*")]
#[case("docs.$.tsx", "docs/*")]
#[case("($lang).about.tsx", ":lang?/about")]
#[case("users.[$special].tsx", "users/$special")]
#[case("[robots.txt].ts", "robots.txt")]
#[case("app.[_]internal.tsx", "app/_internal")]
#[case("shop/route.tsx", "shop")]
fn test_root_level_paths(#[case] file: &str, #[case] expected: &str) {
    let (manifest, _) = build(&[file]);
    let (_, route) = manifest.iter().next().unwrap();
    assert_eq!(route.path.as_deref(), Some(expected));
    assert_eq!(route.parent_id, None);
}

#[test]
fn test_optional_parent() {
    let (manifest, _) = build(&["($lang).tsx", "($lang).about.tsx"]);
    assert_eq!(path_of(&manifest, "($lang)"), Some(":lang?"));
    assert_eq!(parent_of(&manifest, "($lang).about"), Some("($lang)"));
    assert_eq!(path_of(&manifest, "($lang).about"), Some("about"));
}

#[test]
fn test_nested_pathless_layouts() {
    let (manifest, _) = build(&[
        "_app.tsx",
        "_app._shell.tsx",
        "_app._shell.settings.tsx",
        "_app._shell.settings.profile.tsx",
    ]);
    assert_eq!(parent_of(&manifest, "_app._shell"), Some("_app"));
    assert_eq!(path_of(&manifest, "_app._shell"), None);
    assert_eq!(parent_of(&manifest, "_app._shell.settings"), Some("_app._shell"));
    assert_eq!(path_of(&manifest, "_app._shell.settings"), Some("settings"));
    assert_eq!(path_of(&manifest, "_app._shell.settings.profile"), Some("profile"));
    assert_eq!(
        manifest.full_path("_app._shell.settings.profile").as_deref(),
        Some("/settings/profile")
    );
}

// ============================================================================
// Conflict Resolution
// ============================================================================

#[test]
fn test_route_id_conflict_first_file_wins() {
    let (manifest, diagnostics) = build(&["users/route.tsx", "users/index.tsx", "users.tsx"]);

    assert_eq!(manifest.len(), 1);
    assert_eq!(manifest.get("users").unwrap().file, "users.tsx");

    let conflicts: Vec<_> = diagnostics.route_id_conflicts().collect();
    assert_eq!(
        conflicts,
        vec![&Conflict::RouteId {
            route_id: "users".into(),
            files: vec![
                "users.tsx".into(),
                "users/index.tsx".into(),
                "users/route.tsx".into(),
            ],
        }]
    );
}

#[test]
fn test_route_id_loser_takes_no_part_in_nesting() {
    let (manifest, _) = build(&["users.tsx", "users/route.tsx", "users.$id.tsx"]);
    assert_eq!(manifest.len(), 2);
    assert_eq!(parent_of(&manifest, "users.$id"), Some("users"));
}

#[test]
fn test_url_conflict_between_folder_and_flat_file() {
    let (manifest, diagnostics) = build(&["dashboard/index.tsx", "_app.dashboard.tsx"]);

    assert!(manifest.contains("_app.dashboard"));
    assert!(!manifest.contains("dashboard"));

    let conflicts: Vec<_> = diagnostics.url_conflicts().collect();
    assert_eq!(
        conflicts,
        vec![&Conflict::UrlPath {
            pathname: "dashboard".into(),
            files: vec!["_app.dashboard.tsx".into(), "dashboard/index.tsx".into()],
        }]
    );
}

#[test]
fn test_url_conflict_between_index_routes() {
    let (manifest, diagnostics) = build(&["_public._index.tsx", "_index.tsx"]);
    assert!(manifest.contains("_index"));
    assert!(!manifest.contains("_public._index"));
    assert_eq!(diagnostics.url_conflicts().count(), 1);
}

#[test]
fn test_index_and_layout_share_path_without_conflict() {
    let (manifest, diagnostics) = build(&["users.tsx", "users._index.tsx"]);
    assert!(diagnostics.is_empty());
    assert_eq!(manifest.len(), 2);
}

#[test]
fn test_pathless_layouts_never_conflict() {
    let (manifest, diagnostics) = build(&["_a.tsx", "_b.tsx", "_a.one.tsx", "_b.two.tsx"]);
    assert!(diagnostics.is_empty());
    assert_eq!(manifest.len(), 4);
}

#[test]
fn test_every_parent_id_survives() {
    let (manifest, diagnostics) = build(&[
        "_a.about.tsx",
        "_b.tsx",
        "_b.about.tsx",
        "_b.about.team.tsx",
        "_b.about.team.$member.tsx",
    ]);
    assert_eq!(diagnostics.url_conflicts().count(), 1);

    for (_, route) in manifest.iter() {
        if let Some(parent) = route.parent_id.as_deref() {
            assert!(manifest.contains(parent), "{} points at removed {parent}", route.id);
        }
    }
    assert_eq!(parent_of(&manifest, "_b.about.team.$member"), Some("_b.about.team"));
    assert_eq!(path_of(&manifest, "_b.about.team.$member"), Some(":member"));
}

// ============================================================================
// Determinism and Errors
// ============================================================================

#[test]
fn test_same_manifest_for_any_input_order() {
    let files = [
        "Users.tsx",
        "users.tsx",
        "users/route.tsx",
        "_index.tsx",
        "about.tsx",
        "_x.about.tsx",
        "users.$id.tsx",
    ];
    let (forward, forward_diagnostics) = build(&files);

    let reversed: Vec<&str> = files.iter().rev().copied().collect();
    let (backward, backward_diagnostics) = build(&reversed);

    assert_eq!(
        serde_json::to_string(&forward).unwrap(),
        serde_json::to_string(&backward).unwrap()
    );
    assert_eq!(forward_diagnostics.conflicts, backward_diagnostics.conflicts);
}

#[test]
fn test_manifest_json_shape() {
    let (manifest, _) = build(&["users.tsx", "users._index.tsx"]);
    let json = serde_json::to_value(&manifest).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "users": { "file": "users.tsx", "id": "users", "path": "users" },
            "users._index": {
                "file": "users._index.tsx",
                "id": "users._index",
                "index": true,
                "parentId": "users"
            }
        })
    );
}

#[test]
fn test_windows_separators() {
    let manifest = build_manifest(
        "app\\routes",
        ["app\\routes\\users.tsx", "app\\routes\\users.$id\\route.tsx"],
    )
    .unwrap();
    assert_eq!(manifest.get("users.$id").unwrap().file, "users.$id/route.tsx");
    assert_eq!(parent_of(&manifest, "users.$id"), Some("users"));
}

#[test]
fn test_trailing_slash_on_root() {
    let manifest = build_manifest("app/routes/", ["app/routes/about.tsx"]).unwrap();
    assert!(manifest.contains("about"));
}

#[test]
fn test_literal_colon_is_fatal() {
    let err = build_manifest(ROOT, ["app/routes/a:b.tsx"]).unwrap_err();
    assert!(matches!(err, RouteError::InvalidSegment { character: ':', .. }));
    assert!(err.to_string().contains("\"a:b\""));
}

#[test]
fn test_file_outside_root_is_fatal() {
    let err = build_manifest(ROOT, ["app/other/a.tsx"]).unwrap_err();
    assert!(matches!(err, RouteError::OutsideRoot { .. }));
}

#[test]
fn test_empty_input() {
    let manifest = build_manifest(ROOT, Vec::<String>::new()).unwrap();
    assert!(manifest.is_empty());
}
