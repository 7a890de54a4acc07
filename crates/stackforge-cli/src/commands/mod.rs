//! Command handlers. One module per subcommand; the dispatch table lives in
//! `main.rs`.

pub mod completions;
pub mod list;
pub mod new;
