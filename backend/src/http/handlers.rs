//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use super::dto::{HealthResponse, RegistrationListResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::{Registration, Schedule, ScheduleConfig};
use crate::services::{self, ScheduleConfigPatch};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Registrations
// =============================================================================

/// GET /v1/registrations
pub async fn list_registrations(
    State(state): State<AppState>,
) -> HandlerResult<RegistrationListResponse> {
    let registrations = services::list_registrations(state.repository.as_ref()).await?;
    let total = registrations.len();

    Ok(Json(RegistrationListResponse {
        registrations,
        total,
    }))
}

/// POST /v1/registrations
///
/// Inserts or replaces a registration. A blank id gets a fresh UUID.
pub async fn create_registration(
    State(state): State<AppState>,
    Json(mut registration): Json<Registration>,
) -> Result<(StatusCode, Json<Registration>), AppError> {
    if registration.participant_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "participantName must not be empty".to_string(),
        ));
    }
    if registration.id.trim().is_empty() {
        registration.id = uuid::Uuid::new_v4().to_string();
    }

    let stored = services::store_registration(state.repository.as_ref(), registration).await?;
    info!("Stored registration {} ({:?})", stored.id, stored.status);

    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /v1/registrations/{id}
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Registration> {
    let registration = services::get_registration(state.repository.as_ref(), &id).await?;
    Ok(Json(registration))
}

// =============================================================================
// Schedule
// =============================================================================

/// GET /v1/schedule/config
///
/// The configured defaults a generation request starts from.
pub async fn get_schedule_config(State(state): State<AppState>) -> HandlerResult<ScheduleConfig> {
    Ok(Json(state.schedule_defaults))
}

/// POST /v1/schedule/generate
///
/// The body is optional; any fields present override the configured
/// defaults for this run only.
pub async fn generate_schedule(
    State(state): State<AppState>,
    body: Bytes,
) -> HandlerResult<Schedule> {
    let patch = parse_patch(&body)?;
    let config = patch.apply(&state.schedule_defaults);

    let schedule =
        services::generate_schedule(state.repository.as_ref(), &config, &state.sections)
            .await
            .inspect_err(|e| warn!("Schedule generation refused: {}", e))?;

    Ok(Json(schedule))
}

fn parse_patch(body: &[u8]) -> Result<ScheduleConfigPatch, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ScheduleConfigPatch::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid schedule config: {}", e)))
}
