use axum::{Extension, Json, extract::Query, http::StatusCode};
use tracing::{info, instrument};

use crate::{
    error::AppError,
    models::{ActivityLogRecord, LogActivityResponse},
    params::LogActivityParams,
    repositories::activity_log::ActivityLogRepo,
};

#[instrument(name = "handlers.log_activity", skip(activity_log_repo, query))]
pub async fn log_activity_handler(
    Extension(activity_log_repo): Extension<ActivityLogRepo>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<LogActivityResponse>), AppError> {
    let params = LogActivityParams::parse(&query)?;

    let record = ActivityLogRecord::qr_code(params.pet_id, params.user_id, params.activity_type);

    activity_log_repo
        .insert(&record)
        .await
        .map_err(AppError::Persistence)?;

    info!(
        msg = "Activity logged",
        pet_id = %record.pet_id,
        user_id = %record.user_id,
        activity_type = %record.activity_type
    );

    Ok((StatusCode::CREATED, Json(LogActivityResponse::logged())))
}
