//! Habit HTTP handlers.
//!
//! ```text
//! GET    /v1/habits       List every habit
//! POST   /v1/habits       Create a habit
//! GET    /v1/habits/{id}  Fetch one habit
//! PUT    /v1/habits/{id}  Replace a habit's attributes
//! DELETE /v1/habits/{id}  Remove a habit
//! ```

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, delete, get, post, put, web};
use futures_util::future::{Ready, ready};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, Habit, HabitDetails, HabitId, HabitIdError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorBody, ValidationErrorsBody};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_habit_id, require_habit_fields};

/// Client-facing message for a request body that is not a habit object.
pub const DECODE_FAILED_MESSAGE: &str = "Could not decode entity from JSON";
/// Response header carrying the identifier of a newly created habit.
pub const CREATED_ID_HEADER: &str = "X-Created-Id";
/// Path prefix under which habit resources are mounted.
pub const HABITS_PATH: &str = "/v1/habits";

/// Wire representation of a habit.
///
/// Missing keys decode as empty strings so that an absent field surfaces as a
/// validation failure rather than a decode failure. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct HabitTransfer {
    /// Server-assigned identifier; ignored on create and update.
    #[schema(format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Drink water")]
    pub description: String,
    #[schema(example = "#3366FF")]
    pub colour_hex: String,
    #[schema(example = "data:image/png;base64,iVBORw0KGgo=")]
    pub icon_base64: String,
    #[schema(example = "daily")]
    pub mode_type: String,
}

impl From<&Habit> for HabitTransfer {
    fn from(habit: &Habit) -> Self {
        let details = habit.details();
        Self {
            id: habit.id().to_string(),
            description: details.description.clone(),
            colour_hex: details.colour_hex.clone(),
            icon_base64: details.icon_base64.clone(),
            mode_type: details.mode_type.clone(),
        }
    }
}

impl HabitTransfer {
    /// Convert into a domain habit, parsing the identifier.
    ///
    /// # Examples
    /// ```
    /// use habits_backend::domain::HabitIdError;
    /// use habits_backend::inbound::http::habits::HabitTransfer;
    ///
    /// let transfer = HabitTransfer {
    ///     id: "not-a-valid-uuid".into(),
    ///     ..HabitTransfer::default()
    /// };
    /// assert_eq!(transfer.into_habit(), Err(HabitIdError::Invalid));
    /// ```
    pub fn into_habit(self) -> Result<Habit, HabitIdError> {
        let id = HabitId::new(&self.id)?;
        Ok(Habit::new(id, self.into_details()))
    }

    /// Drop the identifier and keep the four attributes verbatim.
    pub fn into_details(self) -> HabitDetails {
        HabitDetails {
            description: self.description,
            colour_hex: self.colour_hex,
            icon_base64: self.icon_base64,
            mode_type: self.mode_type,
        }
    }
}

/// Habit identifier taken from the `{id}` path segment.
///
/// Parsing happens during extraction so a malformed identifier is rejected
/// before the request body is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HabitPathId(pub HabitId);

impl FromRequest for HabitPathId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(parse_habit_id(raw).map(Self))
    }
}

/// JSON extractor configuration for habit bodies.
///
/// Any decode failure, including a missing or wrong content type, is answered
/// with `400 {"error": "Could not decode entity from JSON"}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            debug!(error = %err, "rejecting undecodable habit payload");
            Error::invalid_request(DECODE_FAILED_MESSAGE).into()
        })
}

/// List every habit.
#[utoipa::path(
    get,
    path = "/v1/habits",
    responses(
        (status = 200, description = "All habits", body = [HabitTransfer]),
        (status = 500, description = "Database connection failed", body = ErrorBody)
    ),
    tags = ["habits"],
    operation_id = "listHabits"
)]
#[get("/habits")]
pub async fn list_habits(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<HabitTransfer>>> {
    let habits = state.habits_query.list_habits().await?;
    Ok(web::Json(habits.iter().map(HabitTransfer::from).collect()))
}

/// Fetch one habit by identifier.
#[utoipa::path(
    get,
    path = "/v1/habits/{id}",
    params(("id" = String, Path, description = "Habit identifier (UUID)")),
    responses(
        (status = 200, description = "Habit", body = HabitTransfer),
        (status = 400, description = "Invalid request url params", body = ErrorBody),
        (status = 404, description = "No habit has this identifier"),
        (status = 500, description = "Database connection failed", body = ErrorBody)
    ),
    tags = ["habits"],
    operation_id = "getHabit"
)]
#[get("/habits/{id}")]
pub async fn get_habit(
    state: web::Data<HttpState>,
    id: HabitPathId,
) -> ApiResult<web::Json<HabitTransfer>> {
    let habit = state.habits_query.fetch_habit(&id.0).await?;
    Ok(web::Json(HabitTransfer::from(&habit)))
}

/// Create a habit under a server-assigned identifier.
///
/// Any `id` in the body is ignored. The response carries the new resource
/// path in `Location`, the bare identifier in `X-Created-Id`, and the created
/// habit as the body.
#[utoipa::path(
    post,
    path = "/v1/habits",
    request_body = HabitTransfer,
    responses(
        (
            status = 201,
            description = "Habit created",
            body = HabitTransfer,
            headers(
                ("Location" = String, description = "Path of the created habit"),
                ("X-Created-Id" = String, description = "Identifier of the created habit")
            )
        ),
        (status = 400, description = "Could not decode entity from JSON", body = ErrorBody),
        (status = 422, description = "Required fields missing", body = ValidationErrorsBody),
        (status = 500, description = "Could not create entity", body = ErrorBody)
    ),
    tags = ["habits"],
    operation_id = "createHabit"
)]
#[post("/habits")]
pub async fn create_habit(
    state: web::Data<HttpState>,
    payload: web::Json<HabitTransfer>,
) -> ApiResult<HttpResponse> {
    let transfer = payload.into_inner();
    require_habit_fields(&transfer)?;
    let habit = state.habits.create_habit(transfer.into_details()).await?;
    let id = habit.id().to_string();
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("{HABITS_PATH}/{id}")))
        .insert_header((CREATED_ID_HEADER, id))
        .json(HabitTransfer::from(&habit)))
}

/// Replace the four attributes of an existing habit.
///
/// The path identifier wins over any `id` in the body.
#[utoipa::path(
    put,
    path = "/v1/habits/{id}",
    params(("id" = String, Path, description = "Habit identifier (UUID)")),
    request_body = HabitTransfer,
    responses(
        (status = 200, description = "Habit updated"),
        (status = 400, description = "Invalid path identifier or body", body = ErrorBody),
        (status = 404, description = "No habit has this identifier"),
        (status = 422, description = "Required fields missing", body = ValidationErrorsBody),
        (status = 500, description = "Update failed", body = ErrorBody)
    ),
    tags = ["habits"],
    operation_id = "updateHabit"
)]
#[put("/habits/{id}")]
pub async fn update_habit(
    state: web::Data<HttpState>,
    id: HabitPathId,
    payload: web::Json<HabitTransfer>,
) -> ApiResult<HttpResponse> {
    let transfer = payload.into_inner();
    require_habit_fields(&transfer)?;
    state
        .habits
        .update_habit(id.0, transfer.into_details())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

/// Delete a habit.
#[utoipa::path(
    delete,
    path = "/v1/habits/{id}",
    params(("id" = String, Path, description = "Habit identifier (UUID)")),
    responses(
        (status = 200, description = "Habit deleted"),
        (status = 400, description = "Invalid request url params", body = ErrorBody),
        (status = 404, description = "No habit has this identifier"),
        (status = 500, description = "Could not delete entity", body = ErrorBody)
    ),
    tags = ["habits"],
    operation_id = "deleteHabit"
)]
#[delete("/habits/{id}")]
pub async fn delete_habit(state: web::Data<HttpState>, id: HabitPathId) -> ApiResult<HttpResponse> {
    state.habits.delete_habit(&id.0).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "habits_tests.rs"]
mod tests;
