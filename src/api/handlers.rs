//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::state::{AppState, ControlError};
use super::responses::{ApiResponse, HealthResponse, SliderRequest, StatusResponse};

/// Status code for a rejected panel action
fn rejection_status(error: &ControlError) -> StatusCode {
    match error {
        ControlError::InvalidSlider(_) => StatusCode::BAD_REQUEST,
        ControlError::AlreadyRunning => StatusCode::CONFLICT,
        ControlError::Lock { .. } | ControlError::Timer(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Answer a rejected action with the panel as it stands, or a bare 500
fn reject(state: &AppState, error: ControlError) -> Result<(StatusCode, Json<ApiResponse>), StatusCode> {
    let status = rejection_status(&error);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Panel action failed: {}", error);
        return Err(status);
    }

    warn!("Rejected panel action: {}", error);
    match state.get_control_state() {
        Ok(controls) => Ok((status, Json(ApiResponse::error(error.to_string(), controls)))),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Handle PUT /slider - Move the interval slider
pub async fn slider_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SliderRequest>,
) -> Result<(StatusCode, Json<ApiResponse>), StatusCode> {
    match state.set_slider(request.value) {
        Ok(controls) => Ok((
            StatusCode::OK,
            Json(ApiResponse::from_controls(
                format!("Interval set to {} minutes", controls.slider_label),
                controls,
            )),
        )),
        Err(e) => reject(&state, e),
    }
}

/// Handle POST /start - Start jiggling at the slider interval
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<ApiResponse>), StatusCode> {
    match state.start() {
        Ok(controls) => {
            info!("Start endpoint called - jiggling every {} seconds", controls.interval_seconds);
            Ok((
                StatusCode::OK,
                Json(ApiResponse::from_controls(
                    format!("Jiggling every {} seconds", controls.interval_seconds),
                    controls,
                )),
            ))
        }
        Err(e) => reject(&state, e),
    }
}

/// Handle POST /stop - Stop jiggling
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.stop() {
        Ok(controls) => {
            info!("Stop endpoint called - jiggling stopped");
            Ok(Json(ApiResponse::from_controls("Jiggling stopped".to_string(), controls)))
        }
        Err(e) => {
            error!("Failed to stop jiggling: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return current panel and timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let controls = match state.get_control_state() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to get control state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let timer = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        controls,
        timer,
        jiggles: state.jiggle_count(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
