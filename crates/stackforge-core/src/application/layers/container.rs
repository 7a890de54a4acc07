//! Container feature layer (`docker` flag).
//!
//! Writes a language-keyed `Dockerfile` and a generic `docker-compose.yml`
//! with the application container plus a postgres service as a default
//! dependency placeholder.
//!
//! ## Fallback policy
//!
//! Dockerfile selection goes through the language profile. Languages without
//! a Dockerfile template (and the generic fallback profile) get the
//! Node/TypeScript-style Dockerfile: a slightly-wrong Dockerfile the user can
//! edit beats refusing to containerize.

use super::FeatureLayer;
use crate::domain::{FeatureFlag, FilePlan, Language, profile};

pub struct ContainerLayer;

const COMPOSE_FILE: &str = "\
services:
  app:
    build: .
    ports:
      - \"3000:3000\"
    env_file:
      - .env
    depends_on:
      - db

  # Default dependency placeholder; replace or remove as needed.
  db:
    image: postgres:16-alpine
    environment:
      POSTGRES_USER: user
      POSTGRES_PASSWORD: password
      POSTGRES_DB: app
    volumes:
      - db-data:/var/lib/postgresql/data

volumes:
  db-data:
";

impl FeatureLayer for ContainerLayer {
    fn name(&self) -> &'static str {
        "container"
    }

    fn flag(&self) -> FeatureFlag {
        FeatureFlag::Docker
    }

    fn render(&self, language: Language) -> FilePlan {
        let dockerfile = profile::resolve(language)
            .dockerfile
            .unwrap_or_else(|| node_style_dockerfile());

        FilePlan::new()
            .with("Dockerfile", dockerfile)
            .with("docker-compose.yml", COMPOSE_FILE)
    }
}

/// The general-purpose Dockerfile used when a language has no template of
/// its own.
fn node_style_dockerfile() -> &'static str {
    profile::resolve(Language::TypeScript)
        .dockerfile
        .unwrap_or("FROM node:20-alpine\nWORKDIR /app\nCOPY . .\nCMD [\"npm\", \"start\"]\n")
}
