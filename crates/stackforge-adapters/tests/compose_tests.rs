//! End-to-end composition tests: real registry and generators against the
//! in-memory filesystem.

use std::path::{Path, PathBuf};

use stackforge_adapters::{BuiltinRegistry, MemoryFilesystem};
use stackforge_core::{
    domain::{FeatureFlagSet, StackCatalog},
    error::EngineError,
    prelude::*,
};

fn engine(fs: MemoryFilesystem) -> ComposeEngine {
    ComposeEngine::new(
        StackCatalog::builtin(),
        Box::new(BuiltinRegistry::with_builtin()),
        Box::new(fs),
    )
}

fn read(fs: &MemoryFilesystem, path: &str) -> String {
    fs.read_file(Path::new(path))
        .unwrap_or_else(|| panic!("expected file {path}"))
}

#[test]
fn every_catalog_stack_generates_a_nonempty_project_with_readme() {
    for descriptor in StackCatalog::builtin().all() {
        let fs = MemoryFilesystem::new();
        let target = format!("/out/{}", descriptor.id);
        let report = engine(fs.clone())
            .generate(
                Path::new(&target),
                descriptor.id,
                &FeatureFlagSet::none(),
                "demo",
            )
            .unwrap_or_else(|e| panic!("{} failed: {e}", descriptor.id));

        assert!(!report.written.is_empty(), "{} wrote nothing", descriptor.id);
        let readme = read(&fs, &format!("{target}/README.md"));
        assert!(readme.contains("demo"), "{} readme missing name", descriptor.id);
    }
}

#[test]
fn unknown_stack_id_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let err = engine(fs.clone())
        .generate(
            Path::new("/out/y"),
            "cobol-cics",
            &FeatureFlagSet::none(),
            "y",
        )
        .unwrap_err();

    assert!(matches!(err, EngineError::UnknownStack { .. }));
    assert_eq!(fs.file_count(), 0);
    assert!(!fs.exists(Path::new("/out/y")));
}

#[test]
fn existing_target_directory_is_left_untouched() {
    let fs = MemoryFilesystem::with_dir("/out/taken");
    let err = engine(fs.clone())
        .generate(
            Path::new("/out/taken"),
            "express-api",
            &FeatureFlagSet::none(),
            "taken",
        )
        .unwrap_err();

    assert!(matches!(err, EngineError::TargetExists { .. }));
    assert_eq!(fs.file_count(), 0);
}

#[test]
fn flag_order_yields_identical_trees() {
    let fs_a = MemoryFilesystem::new();
    let fs_b = MemoryFilesystem::new();

    engine(fs_a.clone())
        .generate(
            Path::new("/out/x"),
            "fastapi-modern",
            &FeatureFlagSet::from_keys(["ci", "docker"]),
            "x",
        )
        .expect("first run");
    engine(fs_b.clone())
        .generate(
            Path::new("/out/x"),
            "fastapi-modern",
            &FeatureFlagSet::from_keys(["docker", "ci"]),
            "x",
        )
        .expect("second run");

    assert_eq!(fs_a.list_files(), fs_b.list_files());
    for path in fs_a.list_files() {
        assert_eq!(
            fs_a.read_file(&path),
            fs_b.read_file(&path),
            "content diverged at {}",
            path.display()
        );
    }
}

#[test]
fn stack_gitignore_wins_over_common_layer() {
    let fs = MemoryFilesystem::new();
    engine(fs.clone())
        .generate(
            Path::new("/out/x"),
            "express-api",
            &FeatureFlagSet::none(),
            "x",
        )
        .expect("generation");

    // The common layer writes a profile-generic ignore file first; the
    // Express generator overwrites it with node rules.
    let ignore = read(&fs, "/out/x/.gitignore");
    assert!(ignore.contains("node_modules/"));
}

#[test]
fn docker_flag_adds_dockerfile_and_compose() {
    let fs = MemoryFilesystem::new();
    engine(fs.clone())
        .generate(
            Path::new("/out/x"),
            "go-fiber",
            &FeatureFlagSet::from_keys(["docker"]),
            "x",
        )
        .expect("generation");

    assert!(read(&fs, "/out/x/Dockerfile").contains("golang:1.23"));
    assert!(read(&fs, "/out/x/docker-compose.yml").contains("postgres:16-alpine"));
}

#[test]
fn hooks_flag_changes_the_generated_manifest() {
    let plain = MemoryFilesystem::new();
    let hooked = MemoryFilesystem::new();
    engine(plain.clone())
        .generate(Path::new("/out/x"), "express-api", &FeatureFlagSet::none(), "x")
        .expect("plain run");
    engine(hooked.clone())
        .generate(
            Path::new("/out/x"),
            "express-api",
            &FeatureFlagSet::from_keys(["hooks"]),
            "x",
        )
        .expect("hooked run");

    let plain_manifest = read(&plain, "/out/x/package.json");
    let hooked_manifest = read(&hooked, "/out/x/package.json");
    assert_ne!(plain_manifest, hooked_manifest);
    assert!(hooked_manifest.contains("husky"));
}

#[test]
fn ci_flag_writes_language_matched_workflow() {
    let fs = MemoryFilesystem::new();
    engine(fs.clone())
        .generate(
            Path::new("/out/x"),
            "django-pro",
            &FeatureFlagSet::from_keys(["ci"]),
            "x",
        )
        .expect("generation");

    let workflow = read(&fs, "/out/x/.github/workflows/ci.yml");
    assert!(workflow.contains("setup-python"));
}

#[test]
fn catalog_only_stacks_degrade_to_basic_structure() {
    for id in ["laravel-api", "spring-boot"] {
        let fs = MemoryFilesystem::new();
        let target = format!("/out/{id}");
        let report = engine(fs.clone())
            .generate(Path::new(&target), id, &FeatureFlagSet::none(), "app")
            .unwrap_or_else(|e| panic!("{id} failed: {e}"));

        assert!(report.fallback_used, "{id} should use the fallback");
        let note = read(&fs, &format!("{target}/GETTING_STARTED.md"));
        assert!(note.contains(id));
    }
}

#[test]
fn bespoke_stacks_never_use_the_fallback() {
    let registry = BuiltinRegistry::with_builtin();
    for id in registry.registered_ids() {
        let fs = MemoryFilesystem::new();
        let report = engine(fs)
            .generate(
                Path::new(&format!("/out/{id}")),
                id,
                &FeatureFlagSet::none(),
                "app",
            )
            .unwrap_or_else(|e| panic!("{id} failed: {e}"));
        assert!(!report.fallback_used, "{id} unexpectedly fell back");
    }
}

#[test]
fn go_fiber_scenario_end_to_end() {
    let fs = MemoryFilesystem::new();
    let report = engine(fs.clone())
        .generate(
            Path::new("/tmp/x"),
            "go-fiber",
            &FeatureFlagSet::from_keys(["docker", "ci"]),
            "x",
        )
        .expect("generation");

    assert_eq!(report.descriptor.id, "go-fiber");
    assert!(read(&fs, "/tmp/x/go.mod").contains("module x"));
    assert!(fs.exists(Path::new("/tmp/x/main.go")));
    assert!(fs.exists(Path::new("/tmp/x/Dockerfile")));
    assert!(fs.exists(Path::new("/tmp/x/.github/workflows/ci.yml")));
    assert!(fs.exists(Path::new("/tmp/x/README.md")));
}

#[test]
fn report_lists_every_written_file_exactly_once() {
    let fs = MemoryFilesystem::new();
    let report = engine(fs.clone())
        .generate(
            Path::new("/out/x"),
            "flask-api",
            &FeatureFlagSet::from_keys(["docker", "ci", "vscode"]),
            "x",
        )
        .expect("generation");

    let mut reported: Vec<PathBuf> = report
        .written
        .iter()
        .map(|p| p.resolve(Path::new("/out/x")))
        .collect();
    reported.sort();
    reported.dedup();
    assert_eq!(reported.len(), report.written.len(), "duplicate path in report");
    assert_eq!(reported, fs.list_files());
}
