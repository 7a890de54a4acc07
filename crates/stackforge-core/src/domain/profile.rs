//! Language profiles: per-language commands and boilerplate fragments.
//!
//! [`resolve`] is a *total* lookup; it never fails. Languages without
//! first-class support get [`fallback`], whose commands are human-readable
//! placeholders ("See project documentation") rather than executable strings.
//! That trade (silent degradation for availability) keeps the composition
//! engine from ever blocking on an unsupported language.
//!
//! The common layer consults profiles for README command blocks, ignore-file
//! content and the structure diagram; the container layer uses the Dockerfile
//! template.

use super::descriptor::Language;

/// Derived, read-only data for one language. Never constructed at runtime;
/// all profiles are `'static` tables below.
#[derive(Debug)]
pub struct LanguageProfile {
    /// Display name used in README headings.
    pub display: &'static str,
    pub install_command: &'static str,
    pub run_command: &'static str,
    pub test_command: &'static str,
    /// Content for the language-appropriate ignore file.
    pub ignore_rules: &'static str,
    /// Dockerfile template for the container layer. `None` means the layer
    /// falls back to the Node/TypeScript-style Dockerfile (deliberate
    /// policy, see the container layer docs).
    pub dockerfile: Option<&'static str>,
    /// ASCII project-structure sketch embedded in the README.
    pub structure_diagram: &'static str,
}

/// Resolve the profile for a language. Total: unknown/unsupported languages
/// yield [`fallback`] instead of an error.
pub fn resolve(language: Language) -> &'static LanguageProfile {
    match language {
        Language::JavaScript => &JAVASCRIPT,
        Language::TypeScript => &TYPESCRIPT,
        Language::Python => &PYTHON,
        Language::Go => &GO,
        Language::Rust => &RUST,
        Language::Dart => &DART,
        // No first-class profile yet; degrade instead of failing.
        Language::Php | Language::Java => fallback(),
    }
}

/// The generic profile used when no language-specific one exists.
pub fn fallback() -> &'static LanguageProfile {
    &FALLBACK
}

// ── Profile tables ────────────────────────────────────────────────────────────

static JAVASCRIPT: LanguageProfile = LanguageProfile {
    display: "JavaScript",
    install_command: "npm install",
    run_command: "npm run dev",
    test_command: "npm test",
    ignore_rules: NODE_IGNORE,
    dockerfile: Some(NODE_DOCKERFILE),
    structure_diagram: NODE_STRUCTURE,
};

static TYPESCRIPT: LanguageProfile = LanguageProfile {
    display: "TypeScript",
    install_command: "npm install",
    run_command: "npm run dev",
    test_command: "npm test",
    ignore_rules: NODE_IGNORE,
    dockerfile: Some(NODE_DOCKERFILE),
    structure_diagram: NODE_STRUCTURE,
};

static PYTHON: LanguageProfile = LanguageProfile {
    display: "Python",
    install_command: "pip install -r requirements.txt",
    run_command: "python main.py",
    test_command: "pytest",
    ignore_rules: "\
__pycache__/
*.py[cod]
*.egg-info/
.venv/
venv/
.env
.pytest_cache/
.coverage
htmlcov/
dist/
build/
",
    dockerfile: Some(
        "\
FROM python:3.12-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

EXPOSE 8000

CMD [\"python\", \"main.py\"]
",
    ),
    structure_diagram: "\
.
├── main.py          # application entry point
├── requirements.txt # pinned dependencies
├── src/ or app/     # application modules
└── tests/           # pytest suite
",
};

static GO: LanguageProfile = LanguageProfile {
    display: "Go",
    install_command: "go mod tidy",
    run_command: "go run .",
    test_command: "go test ./...",
    ignore_rules: "\
# Binaries
*.exe
*.dll
*.so
*.dylib
bin/

# Test artifacts
*.test
*.out
coverage.html

.env
vendor/
",
    dockerfile: Some(
        "\
FROM golang:1.23-alpine AS build

WORKDIR /app

COPY go.mod ./
RUN go mod download

COPY . .
RUN go build -o /server .

FROM alpine:3.20
COPY --from=build /server /server

EXPOSE 3000

CMD [\"/server\"]
",
    ),
    structure_diagram: "\
.
├── main.go     # entry point and router setup
├── go.mod      # module definition
├── handlers/   # HTTP handlers
└── models/     # data types
",
};

static RUST: LanguageProfile = LanguageProfile {
    display: "Rust",
    install_command: "cargo build",
    run_command: "cargo run",
    test_command: "cargo test",
    ignore_rules: "\
/target
.env
",
    dockerfile: Some(
        "\
FROM rust:1.85-slim AS build

WORKDIR /app
COPY . .
RUN cargo build --release

FROM debian:bookworm-slim
COPY --from=build /app/target/release/app /usr/local/bin/app

EXPOSE 3000

CMD [\"app\"]
",
    ),
    structure_diagram: "\
.
├── Cargo.toml  # manifest and dependencies
└── src/
    └── main.rs # entry point and routes
",
};

static DART: LanguageProfile = LanguageProfile {
    display: "Dart",
    install_command: "flutter pub get",
    run_command: "flutter run",
    test_command: "flutter test",
    ignore_rules: "\
.dart_tool/
.packages
build/
.flutter-plugins
.flutter-plugins-dependencies
.env
",
    // Mobile builds don't containerize; container layer falls back.
    dockerfile: None,
    structure_diagram: "\
.
├── pubspec.yaml # manifest and dependencies
├── lib/
│   └── main.dart # application entry point
└── test/         # widget tests
",
};

static FALLBACK: LanguageProfile = LanguageProfile {
    display: "your language",
    install_command: "See project documentation",
    run_command: "See project documentation",
    test_command: "See project documentation",
    ignore_rules: "\
# Build output
dist/
build/
out/

# Environment
.env
.env.local

# Editor
.idea/
*.swp
",
    dockerfile: None,
    structure_diagram: "\
.
└── (see the stack's documentation for the idiomatic layout)
",
};

// ── Shared fragments ──────────────────────────────────────────────────────────

const NODE_IGNORE: &str = "\
node_modules/
dist/
build/
coverage/

.env
.env.local
.env.*.local

npm-debug.log*
yarn-debug.log*
yarn-error.log*

.DS_Store
";

const NODE_DOCKERFILE: &str = "\
FROM node:20-alpine

WORKDIR /app

COPY package*.json ./
RUN npm ci --omit=dev

COPY . .

EXPOSE 3000

CMD [\"npm\", \"start\"]
";

const NODE_STRUCTURE: &str = "\
.
├── package.json # manifest and scripts
├── src/
│   ├── index    # entry point
│   └── routes/  # route handlers
└── tests/
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_total_over_all_languages() {
        // Every variant must resolve to *something* with non-empty commands.
        for lang in [
            Language::JavaScript,
            Language::TypeScript,
            Language::Python,
            Language::Go,
            Language::Rust,
            Language::Dart,
            Language::Php,
            Language::Java,
        ] {
            let p = resolve(lang);
            assert!(!p.install_command.is_empty(), "empty install for {lang}");
            assert!(!p.ignore_rules.is_empty(), "empty ignore for {lang}");
        }
    }

    #[test]
    fn unsupported_languages_get_fallback() {
        let p = resolve(Language::Php);
        assert!(std::ptr::eq(p, fallback()));
        assert_eq!(p.install_command, "See project documentation");
        assert!(p.dockerfile.is_none());
    }

    #[test]
    fn javascript_and_typescript_share_node_fragments() {
        assert_eq!(
            resolve(Language::JavaScript).ignore_rules,
            resolve(Language::TypeScript).ignore_rules
        );
    }

    #[test]
    fn go_profile_has_go_commands() {
        let p = resolve(Language::Go);
        assert_eq!(p.run_command, "go run .");
        assert!(p.dockerfile.is_some_and(|d| d.contains("golang")));
    }
}
