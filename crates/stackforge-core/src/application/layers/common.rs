//! The common layer: shared baseline files every project gets.
//!
//! Always runs first and unconditionally produces a README (assembled from
//! the stack descriptor plus the language profile) and a language-appropriate
//! ignore file. Stack generators may later overwrite either; the stack layer
//! runs last and wins.

use std::fmt::Write as _;

use crate::domain::{FeatureFlag, FilePlan, GenerationContext, profile};

/// Render the shared baseline for a generation context.
pub fn render(ctx: &GenerationContext) -> FilePlan {
    let descriptor = ctx.descriptor();
    let profile = profile::resolve(descriptor.language);

    let mut readme = String::new();
    // write! to a String cannot fail; discard the Infallible results.
    let _ = writeln!(readme, "# {}", ctx.project_name());
    let _ = writeln!(readme);
    let _ = writeln!(
        readme,
        "{} project generated with [Stackforge](https://github.com/stackforge/stackforge).",
        descriptor.name
    );
    let _ = writeln!(readme);
    let _ = writeln!(readme, "{}", descriptor.description);

    if !descriptor.features.is_empty() {
        let _ = writeln!(readme);
        let _ = writeln!(readme, "## Features");
        let _ = writeln!(readme);
        for feature in &descriptor.features {
            let _ = writeln!(readme, "- {feature}");
        }
    }

    let _ = writeln!(readme);
    let _ = writeln!(readme, "## Getting started ({})", profile.display);
    let _ = writeln!(readme);
    let _ = writeln!(readme, "```sh");
    let _ = writeln!(readme, "# install dependencies");
    let _ = writeln!(readme, "{}", profile.install_command);
    let _ = writeln!(readme);
    let _ = writeln!(readme, "# run the application");
    let _ = writeln!(readme, "{}", profile.run_command);
    // The test command is only advertised when the testing flag provisions
    // a test setup; without it several stacks ship no `test` script at all.
    if ctx.flags().contains(FeatureFlag::Testing) {
        let _ = writeln!(readme);
        let _ = writeln!(readme, "# run the tests");
        let _ = writeln!(readme, "{}", profile.test_command);
    }
    let _ = writeln!(readme, "```");

    let _ = writeln!(readme);
    let _ = writeln!(readme, "## Project structure");
    let _ = writeln!(readme);
    let _ = writeln!(readme, "```text");
    let _ = write!(readme, "{}", profile.structure_diagram);
    let _ = writeln!(readme, "```");

    FilePlan::new()
        .with("README.md", readme)
        .with(".gitignore", profile.ignore_rules)
}
