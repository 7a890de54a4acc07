//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackforge",
    bin_name = "stackforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant project boilerplate",
    long_about = "Stackforge generates ready-to-run project boilerplates \
                  for popular web, API and mobile stacks.",
    after_help = "EXAMPLES:\n\
        \x20 stackforge new my-api --stack go-fiber --features docker,ci\n\
        \x20 stackforge new my-app --stack fastapi-modern\n\
        \x20 stackforge list --lang python\n\
        \x20 stackforge completions bash > /usr/share/bash-completion/completions/stackforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project from a stack.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 stackforge new my-api --stack express-api\n\
            \x20 stackforge new my-api --stack go-fiber --features docker,ci,vscode\n\
            \x20 stackforge new ../svc --stack rust-axum --features testing"
    )]
    New(NewArgs),

    /// List the stack catalog.
    #[command(
        visible_alias = "ls",
        about = "List available stacks",
        after_help = "EXAMPLES:\n\
            \x20 stackforge list\n\
            \x20 stackforge list --lang go\n\
            \x20 stackforge list --category mobile --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackforge completions bash > ~/.local/share/bash-completion/completions/stackforge\n\
            \x20 stackforge completions zsh  > ~/.zfunc/_stackforge\n\
            \x20 stackforge completions fish > ~/.config/fish/completions/stackforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stackforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path. A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: String,

    /// Stack id from the catalog.
    #[arg(
        short = 's',
        long = "stack",
        value_name = "STACK",
        help = "Stack id (see `stackforge list`)"
    )]
    pub stack: Option<String>,

    /// Comma-separated feature keys.
    #[arg(
        short = 'F',
        long = "features",
        value_name = "FEATURES",
        value_delimiter = ',',
        help = "Features to enable (docker, ci, vscode, linting, testing, hooks)"
    )]
    pub features: Vec<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackforge list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by language.
    #[arg(short = 'l', long = "lang", value_enum, help = "Filter by language")]
    pub language: Option<LanguageFilter>,

    /// Filter by category.
    #[arg(
        short = 'C',
        long = "category",
        value_enum,
        help = "Filter by category"
    )]
    pub category: Option<CategoryFilter>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

/// Language filter values for `list --lang`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LanguageFilter {
    #[value(alias = "js")]
    JavaScript,
    #[value(alias = "ts")]
    TypeScript,
    Python,
    Go,
    Rust,
    Dart,
    Php,
    Java,
}

impl LanguageFilter {
    pub fn to_core(self) -> stackforge_core::domain::Language {
        use stackforge_core::domain::Language as Core;
        match self {
            Self::JavaScript => Core::JavaScript,
            Self::TypeScript => Core::TypeScript,
            Self::Python => Core::Python,
            Self::Go => Core::Go,
            Self::Rust => Core::Rust,
            Self::Dart => Core::Dart,
            Self::Php => Core::Php,
            Self::Java => Core::Java,
        }
    }
}

/// Category filter values for `list --category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CategoryFilter {
    Web,
    Api,
    Mobile,
}

impl CategoryFilter {
    pub fn to_core(self) -> stackforge_core::domain::Category {
        use stackforge_core::domain::Category as Core;
        match self {
            Self::Web => Core::Web,
            Self::Api => Core::Api,
            Self::Mobile => Core::Mobile,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
