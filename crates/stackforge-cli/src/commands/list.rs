//! Implementation of the `stackforge list` command.

use stackforge_core::domain::{StackCatalog, StackDescriptor};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let catalog = StackCatalog::builtin();

    let stacks: Vec<&StackDescriptor> = catalog
        .all()
        .iter()
        .filter(|s| args.language.is_none_or(|l| s.language == l.to_core()))
        .filter(|s| args.category.is_none_or(|c| s.category == c.to_core()))
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Available stacks:")?;
            for stack in &stacks {
                output.print(&format!(
                    "  {:<16} {:<12} {}",
                    stack.id, stack.language, stack.description
                ))?;
            }
            if stacks.is_empty() {
                output.info("No stacks match the given filters")?;
            }
        }
        ListFormat::List => {
            for stack in &stacks {
                output.print(stack.id)?;
            }
        }
        ListFormat::Json => {
            // JSON goes straight to stdout, bypassing the OutputManager;
            // it must be parseable even in quiet mode and non-TTY pipes.
            let json = serde_json::to_string_pretty(&stacks).map_err(|e| CliError::IoError {
                message: format!("failed to serialise stack list: {e}"),
                source: std::io::Error::other(e),
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
