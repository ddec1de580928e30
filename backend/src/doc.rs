//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the habit and health endpoints together with the wire
//! schemas they exchange. Swagger UI serves it in debug builds, and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::habits::HabitTransfer;
use crate::inbound::http::schemas::{ErrorBody, ValidationErrorsBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Habits API",
        description = "CRUD interface for habit records plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::habits::list_habits,
        crate::inbound::http::habits::get_habit,
        crate::inbound::http::habits::create_habit,
        crate::inbound::http::habits::update_habit,
        crate::inbound::http::habits::delete_habit,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(HabitTransfer, ErrorBody, ValidationErrorsBody)),
    tags(
        (name = "habits", description = "Habit records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
