//! Rendering of domain errors as HTTP responses.
//!
//! | code               | status | body                      |
//! |--------------------|--------|---------------------------|
//! | `InvalidRequest`   | 400    | `{"error": message}`      |
//! | `ValidationFailed` | 422    | `{"errors": violations}`  |
//! | `NotFound`         | 404    | empty                     |
//! | `InternalError`    | 500    | `{"error": message}`      |
//!
//! The domain message is already client-safe, so nothing is redacted here.

use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::schemas::{ErrorBody, ValidationErrorsBody};

/// Result alias returned by every habit handler.
pub type ApiResult<T> = Result<T, Error>;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn with_body(mut builder: HttpResponseBuilder, error: &Error) -> HttpResponse {
    match error.code() {
        ErrorCode::NotFound => builder.finish(),
        ErrorCode::ValidationFailed => builder.json(ValidationErrorsBody {
            errors: error.violations().to_vec(),
        }),
        ErrorCode::InvalidRequest | ErrorCode::InternalError => {
            builder.json(ErrorBody::new(error.message()))
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(trace_id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, trace_id.to_owned()));
        }
        with_body(builder, self)
    }
}
