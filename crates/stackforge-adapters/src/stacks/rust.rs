//! Rust stack generator: Axum API.

use stackforge_core::{
    application::ports::StackGenerator,
    domain::{FeatureFlag, FilePlan, GenerationContext},
};

const RUST_IGNORE: &str = "\
/target
.env
";

pub struct RustAxum;

impl StackGenerator for RustAxum {
    fn stack_id(&self) -> &'static str {
        "rust-axum"
    }

    fn compose(&self, ctx: &GenerationContext) -> FilePlan {
        let mut manifest = format!(
            r#"[package]
name = "{name}"
version = "0.1.0"
edition = "2021"

[dependencies]
axum = "0.7"
tokio = {{ version = "1", features = ["full"] }}
tower-http = {{ version = "0.6", features = ["trace", "cors"] }}
tracing = "0.1"
tracing-subscriber = {{ version = "0.3", features = ["env-filter"] }}
serde = {{ version = "1", features = ["derive"] }}
serde_json = "1"
dotenvy = "0.15"
"#,
            name = ctx.project_name()
        );
        if ctx.flags().contains(FeatureFlag::Testing) {
            manifest.push_str(
                "\n[dev-dependencies]\nreqwest = { version = \"0.12\", features = [\"json\"] }\n",
            );
        }

        FilePlan::new()
            .with("Cargo.toml", manifest)
            .with("src/main.rs", AXUM_MAIN)
            .with("src/routes/mod.rs", AXUM_ROUTES)
            .with("src/routes/health.rs", AXUM_HEALTH)
            .with(".env.example", "PORT=3000\nRUST_LOG=info\n")
            .with(".gitignore", RUST_IGNORE)
    }
}

const AXUM_MAIN: &str = r#"use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = routes::router();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind address");
    axum::serve(listener, app).await.expect("serve");
}
"#;

const AXUM_ROUTES: &str = r#"use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

mod health;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
}
"#;

const AXUM_HEALTH: &str = r#"use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy", "version": "0.1.0" }))
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use stackforge_core::domain::{FeatureFlagSet, StackCatalog};

    fn ctx(flags: FeatureFlagSet) -> GenerationContext {
        let descriptor = StackCatalog::builtin()
            .lookup("rust-axum")
            .expect("known stack")
            .clone();
        GenerationContext::new("/tmp/app", descriptor, flags, "svc")
    }

    fn content_of<'a>(plan: &'a FilePlan, path: &str) -> &'a str {
        plan.iter()
            .find(|e| e.path.as_str() == path)
            .map(|e| e.content.as_str())
            .unwrap_or_else(|| panic!("missing {path}"))
    }

    #[test]
    fn manifest_names_the_project() {
        let plan = RustAxum.compose(&ctx(FeatureFlagSet::none()));
        let manifest = content_of(&plan, "Cargo.toml");
        assert!(manifest.contains("name = \"svc\""));
        assert!(manifest.contains("axum = \"0.7\""));
        assert!(!manifest.contains("[dev-dependencies]"));
    }

    #[test]
    fn testing_flag_adds_dev_dependencies() {
        let plan = RustAxum.compose(&ctx(FeatureFlagSet::from_keys(["testing"])));
        assert!(content_of(&plan, "Cargo.toml").contains("[dev-dependencies]"));
    }

    #[test]
    fn router_mounts_health_route() {
        let plan = RustAxum.compose(&ctx(FeatureFlagSet::none()));
        assert!(content_of(&plan, "src/routes/mod.rs").contains("/health"));
        assert!(content_of(&plan, "src/routes/health.rs").contains("healthy"));
    }
}
