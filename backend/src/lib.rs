//! Habits backend library modules.
//!
//! Hexagonal layout: `domain` holds the habit model, use-cases and ports;
//! `inbound::http` adapts them to Actix handlers; `outbound::persistence`
//! implements the repository port over PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
