pub mod analytics_handlers;
pub mod reference_handlers;
pub mod survey_handlers;

use axum::{http::StatusCode, Json};
use tracing::error;

use crate::models::ApiError;
use crate::sheets::FetchError;

pub type Rejection = (StatusCode, Json<ApiError>);

/// Map a fetch failure to the operation's stable error code. The underlying
/// cause goes to the log, not to the caller.
pub fn fetch_failed(code: &'static str, message: &str, cause: FetchError) -> Rejection {
    error!("{code}: {cause}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            code,
            message: message.to_string(),
        }),
    )
}
