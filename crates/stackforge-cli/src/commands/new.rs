//! Implementation of the `stackforge new` command.
//!
//! Responsibility: translate CLI arguments into an engine call and display
//! results. No composition logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use stackforge_adapters::{BuiltinRegistry, LocalFilesystem};
use stackforge_core::{
    domain::{FeatureFlagSet, StackCatalog, profile},
    prelude::ComposeEngine,
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stackforge new` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the project name / output path
/// 2. Resolve the stack id (flag, then config default) and feature flags
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Run the composition engine against the local filesystem
/// 6. Print next-steps guidance from the language profile
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project path
    let (project_name, project_path) = resolve_project_path(&args.name)?;
    validate_project_name(&project_name)?;
    if project_path.exists() {
        return Err(CliError::ProjectExists { path: project_path });
    }

    // 2. Stack + features (config defaults merge under CLI flags)
    let stack_id = args
        .stack
        .clone()
        .or_else(|| config.defaults.stack.clone())
        .ok_or(CliError::MissingStack)?;
    let flags = FeatureFlagSet::from_keys(
        config
            .defaults
            .features
            .iter()
            .map(String::as_str)
            .chain(args.features.iter().map(String::as_str)),
    );

    debug!(stack = %stack_id, features = %flags, "target resolved");

    let catalog = StackCatalog::builtin();

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&catalog, &stack_id, &flags, &project_name, &project_path, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            project_name,
            project_path.display(),
        ))?;
        output.info(&format!("  Stack:    {stack_id}"))?;
        output.info(&format!(
            "  Features: {}",
            if flags.is_empty() {
                "(none)".to_string()
            } else {
                flags.to_string()
            }
        ))?;
        return Ok(());
    }

    // 5. Run the engine
    let engine = ComposeEngine::new(
        catalog,
        Box::new(BuiltinRegistry::with_builtin()),
        Box::new(LocalFilesystem::new()),
    );

    output.header(&format!("Creating '{project_name}'..."))?;
    info!(project = %project_name, path = %project_path.display(), "generation started");

    let report = engine.generate(&project_path, &stack_id, &flags, &project_name)?;

    info!(project = %project_name, files = report.written.len(), "generation completed");

    // 6. Success + next steps
    output.success(&format!(
        "Project '{}' created ({} files)",
        project_name,
        report.written.len()
    ))?;
    if report.fallback_used {
        output.warning(&format!(
            "'{}' has no full template yet; a basic structure was generated",
            report.descriptor.id
        ))?;
    }

    if !global.quiet {
        let lang_profile = profile::resolve(report.descriptor.language);
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", args.name))?;
        output.print(&format!("  {}", lang_profile.install_command))?;
        output.print(&format!("  {}", lang_profile.run_command))?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split a name-or-path argument into the project name (the final path
/// component) and the full target directory.
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: name.into(),
            reason: "cannot extract valid project name".into(),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "only alphanumerics, hyphens and underscores are allowed".into(),
        });
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    catalog: &StackCatalog,
    stack_id: &str,
    flags: &FeatureFlagSet,
    name: &str,
    project_path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:  {name}"))?;
    match catalog.lookup(stack_id) {
        Some(descriptor) => {
            out.print(&format!("  Stack:    {} ({})", descriptor.name, descriptor.id))?;
            out.print(&format!("  Language: {}", descriptor.language))?;
        }
        // Unknown ids still get shown; the engine rejects them after the
        // prompt with a proper suggestion list.
        None => out.print(&format!("  Stack:    {stack_id}"))?,
    }
    out.print(&format!(
        "  Features: {}",
        if flags.is_empty() {
            "(none)".to_string()
        } else {
            flags.to_string()
        }
    ))?;
    out.print(&format!("  Location: {}", project_path.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve_project_path ──────────────────────────────────────────────

    #[test]
    fn simple_name_resolves_in_place() {
        let (name, dir) = resolve_project_path("my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, PathBuf::from("my-app"));
    }

    #[test]
    fn relative_path_keeps_full_target() {
        let (name, dir) = resolve_project_path("../my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, PathBuf::from("../my-app"));
    }

    #[test]
    fn nested_path_works_on_all_platforms() {
        let sep = std::path::MAIN_SEPARATOR;
        let path = format!("foo{sep}bar{sep}my-app");

        let (name, dir) = resolve_project_path(&path).unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, PathBuf::from("foo").join("bar").join("my-app"));
    }

    // ── validate_project_name ─────────────────────────────────────────────

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_project_name(""),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(matches!(
            validate_project_name(".hidden"),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn exotic_characters_are_invalid() {
        assert!(validate_project_name("a b").is_err());
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a!b").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["my-project", "my_app", "project123", "MyApp"] {
            assert!(validate_project_name(name).is_ok(), "failed for: {name}");
        }
    }
}
