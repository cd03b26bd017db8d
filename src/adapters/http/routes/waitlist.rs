use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use waitlist_types::{JoinWaitlistRequest, SubmissionResult, WaitlistCount};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::{
        use_cases::waitlist::{SUCCESS_MESSAGE, WaitlistUseCases},
        validators::INVALID_FORM_MESSAGE,
    },
};

/// POST /api/waitlist
/// Validates and stores a signup; the admin notification is sent in the background.
async fn join_waitlist(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    payload: Result<Json<JoinWaitlistRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable waitlist payload");
        AppError::Validation {
            message: INVALID_FORM_MESSAGE.into(),
            errors: Default::default(),
        }
    })?;

    waitlist.submit(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResult::success(SUCCESS_MESSAGE)),
    ))
}

/// GET /api/waitlist/count
/// Never fails; reports zero when the store cannot be read.
async fn waitlist_count(State(waitlist): State<Arc<WaitlistUseCases>>) -> Json<WaitlistCount> {
    Json(WaitlistCount {
        count: waitlist.count().await,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlist", post(join_waitlist))
        .route("/waitlist/count", get(waitlist_count))
}
