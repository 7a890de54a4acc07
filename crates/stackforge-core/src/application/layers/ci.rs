//! CI feature layer (`ci` flag).
//!
//! Writes one GitHub Actions workflow under the conventional
//! `.github/workflows/` directory. The workflow is keyed by language, with a
//! generic checkout-only pipeline for languages we cannot name a toolchain
//! for.

use super::FeatureLayer;
use crate::domain::{FeatureFlag, FilePlan, Language};

pub struct CiLayer;

impl FeatureLayer for CiLayer {
    fn name(&self) -> &'static str {
        "ci"
    }

    fn flag(&self) -> FeatureFlag {
        FeatureFlag::Ci
    }

    fn render(&self, language: Language) -> FilePlan {
        FilePlan::new().with(".github/workflows/ci.yml", workflow_for(language))
    }
}

fn workflow_for(language: Language) -> &'static str {
    match language {
        Language::JavaScript | Language::TypeScript => NODE_WORKFLOW,
        Language::Python => PYTHON_WORKFLOW,
        Language::Go => GO_WORKFLOW,
        Language::Rust => RUST_WORKFLOW,
        Language::Dart => FLUTTER_WORKFLOW,
        Language::Php | Language::Java => GENERIC_WORKFLOW,
    }
}

const NODE_WORKFLOW: &str = "\
name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-node@v4
        with:
          node-version: '20'
          cache: npm
      - run: npm ci
      - run: npm test
";

const PYTHON_WORKFLOW: &str = "\
name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-python@v5
        with:
          python-version: '3.12'
          cache: pip
      - run: pip install -r requirements.txt
      - run: pytest
";

const GO_WORKFLOW: &str = "\
name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-go@v5
        with:
          go-version: '1.23'
      - run: go build ./...
      - run: go test ./...
";

const RUST_WORKFLOW: &str = "\
name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: dtolnay/rust-toolchain@stable
      - run: cargo build --all-targets
      - run: cargo test
";

const FLUTTER_WORKFLOW: &str = "\
name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: subosito/flutter-action@v2
        with:
          channel: stable
      - run: flutter pub get
      - run: flutter test
";

const GENERIC_WORKFLOW: &str = "\
name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      # TODO(generated): add toolchain setup and test steps for your stack.
      - run: echo \"add build and test steps\"
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_workflow_under_conventional_path() {
        let plan = CiLayer.render(Language::Go);
        assert_eq!(plan.len(), 1);
        let entry = plan.iter().next().expect("one entry");
        assert_eq!(entry.path.as_str(), ".github/workflows/ci.yml");
    }

    #[test]
    fn workflow_is_language_aware() {
        assert!(workflow_for(Language::Python).contains("setup-python"));
        assert!(workflow_for(Language::Go).contains("setup-go"));
        assert!(workflow_for(Language::Rust).contains("cargo test"));
        assert!(workflow_for(Language::TypeScript).contains("setup-node"));
    }

    #[test]
    fn unprofiled_language_gets_generic_pipeline() {
        let workflow = workflow_for(Language::Java);
        assert!(workflow.contains("actions/checkout@v4"));
        assert!(!workflow.contains("setup-node"));
    }
}
