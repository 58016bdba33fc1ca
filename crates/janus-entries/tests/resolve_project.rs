//! End-to-end entry resolution over on-disk project trees.

use std::path::Path;

use janus_entries::{
    resolve_entries, validate_all_manifests, EntryConfig, EntryError, EntrySource,
    CONFIG_FILE_NAME,
};

fn write(path: &Path, text: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, text).unwrap();
}

fn add_part(root: &Path, dir: &str, id: &str) {
    write(
        &root.join("src/components/activities").join(dir).join("manifest.json"),
        &format!(
            r#"{{
                "id": "{id}",
                "friendlyName": "{dir}",
                "authoring": {{"entry": "./authoring-entry.ts", "element": "{dir}-authoring"}},
                "delivery": {{"entry": "./delivery-entry.ts", "element": "{dir}"}}
            }}"#
        ),
    );
}

fn add_theme(root: &Path, side: &str, name: &str) {
    write(
        &root.join("styles/themes").join(side).join(format!("{name}.scss")),
        "body {}",
    );
}

#[test]
fn entry_count_is_six_plus_two_per_part_plus_themes() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    add_part(root, "janus-slider", "janus_slider");
    add_part(root, "janus-input-text", "janus_input_text");
    add_part(root, "multiple-choice", "oli_multiple_choice");
    add_theme(root, "authoring", "light");
    add_theme(root, "authoring", "dark");
    add_theme(root, "delivery", "default");

    let map = resolve_entries(root, &EntryConfig::default()).unwrap();

    assert_eq!(map.len(), 6 + 2 * 3 + 3);
    assert_eq!(
        map.get("janus_slider_authoring"),
        Some(&EntrySource::Paths(vec![
            "./src/components/activities/janus-slider/authoring-entry.ts".into()
        ]))
    );
    assert_eq!(
        map.get("oli_multiple_choice_delivery"),
        Some(&EntrySource::Paths(vec![
            "./src/components/activities/multiple-choice/delivery-entry.ts".into()
        ]))
    );
    assert_eq!(
        map.get("authoring_theme_dark"),
        Some(&EntrySource::Path("./styles/themes/authoring/dark.scss".into()))
    );
    assert!(map.contains("delivery_theme_default"));
    assert!(map.contains("app"));
}

#[test]
fn empty_project_yields_only_fixed_bundles() {
    let dir = tempfile::tempdir().unwrap();
    let map = resolve_entries(dir.path(), &EntryConfig::default()).unwrap();
    assert_eq!(map.len(), 6);
}

#[test]
fn hidden_themes_and_manifest_dirs_are_not_entries() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    add_theme(root, "authoring", "light");
    add_theme(root, "authoring", ".light");
    add_part(root, ".cache", "stale");

    let map = resolve_entries(root, &EntryConfig::default()).unwrap();
    assert_eq!(map.len(), 7);
    assert!(map.contains("authoring_theme_light"));
    assert!(!map.contains("authoring_theme_.light"));
    assert!(!map.contains("stale_authoring"));
}

#[test]
fn duplicate_manifest_ids_abort_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    add_part(root, "slider-a", "slider");
    add_part(root, "slider-b", "slider");

    match resolve_entries(root, &EntryConfig::default()) {
        Err(EntryError::NamingCollision { expected, actual, collisions }) => {
            assert_eq!(expected, 10);
            assert_eq!(actual, 8);
            assert_eq!(collisions.len(), 2);
            assert!(collisions[0].origins[0].contains("slider-a"));
            assert!(collisions[0].origins[1].contains("slider-b"));
        }
        other => panic!("expected NamingCollision, got {other:?}"),
    }
}

#[test]
fn theme_named_like_a_fixed_bundle_collides() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let config = EntryConfig::from_yaml_str(
        "themes:\n  - dir: styles/extra\n    prefix: ''\n",
        Path::new(CONFIG_FILE_NAME),
    )
    .unwrap();
    write(&root.join("styles/extra/app.scss"), "");

    let err = resolve_entries(root, &config).unwrap_err();
    assert!(matches!(err, EntryError::NamingCollision { .. }));
    assert!(err.to_string().contains("app: <fixed>"));
}

#[test]
fn malformed_manifest_aborts_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    add_part(root, "ok", "ok");
    write(
        &root.join("src/components/activities/broken/manifest.json"),
        "{ not json",
    );
    let err = resolve_entries(root, &EntryConfig::default()).unwrap_err();
    assert!(matches!(err, EntryError::ManifestParse { .. }));
}

#[test]
fn project_config_redirects_discovery() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        &root.join(CONFIG_FILE_NAME),
        "activities_dir: src/components/parts\ninitial_entries:\n  main: ./src/main.ts\n",
    );
    write(
        &root.join("src/components/parts/janus-image/manifest.json"),
        r#"{"id": "janus_image", "authoring": {"entry": "a.ts"}, "delivery": {"entry": "d.ts"}}"#,
    );
    add_part(root, "ignored", "ignored");

    let config = EntryConfig::load(root, None).unwrap();
    let map = resolve_entries(root, &config).unwrap();
    let names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["janus_image_authoring", "janus_image_delivery", "main"]);
}

#[test]
fn manifest_validation_reports_every_failure() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    add_part(root, "good", "good");
    write(
        &root.join("src/components/activities/no-delivery/manifest.json"),
        r#"{"id": "x", "authoring": {"entry": "a.ts"}}"#,
    );
    write(
        &root.join("src/components/activities/empty-id/manifest.json"),
        r#"{"id": "", "authoring": {"entry": "a.ts"}, "delivery": {"entry": "d.ts"}}"#,
    );

    let report = validate_all_manifests(root, &EntryConfig::default()).unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed(), 2);
}
