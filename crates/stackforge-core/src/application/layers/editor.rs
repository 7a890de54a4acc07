//! Editor feature layer (`vscode` flag).
//!
//! One static settings file; not language-sensitive.

use super::FeatureLayer;
use crate::domain::{FeatureFlag, FilePlan, Language};

pub struct EditorLayer;

const SETTINGS: &str = "\
{
  \"editor.formatOnSave\": true,
  \"editor.codeActionsOnSave\": {
    \"source.fixAll\": \"explicit\",
    \"source.organizeImports\": \"explicit\"
  },
  \"files.trimTrailingWhitespace\": true,
  \"files.insertFinalNewline\": true
}
";

impl FeatureLayer for EditorLayer {
    fn name(&self) -> &'static str {
        "editor"
    }

    fn flag(&self) -> FeatureFlag {
        FeatureFlag::Vscode
    }

    fn render(&self, _language: Language) -> FilePlan {
        FilePlan::new().with(".vscode/settings.json", SETTINGS)
    }
}
