//! Auth endpoints over the session cell
//!
//! Login writes the cell, logout clears it, and the session endpoint
//! reads it back. The login/logout pair is the cell's only writer.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use cockpit_auth::{authenticate, default_dashboard_route};
use cockpit_core::AuthSession;

use crate::error::ApiError;
use crate::models::{ApiSuccess, LoginData, LoginRequest, LogoutData};
use crate::AppState;

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiSuccess<LoginData>>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::invalid_input("email and password are required"))?;

    let session = authenticate(state.directory.as_ref(), &body.email, &body.password)
        .await
        .ok_or_else(ApiError::invalid_credentials)?;

    let redirect_to = default_dashboard_route(session.user.role).to_string();
    info!(email = %session.user.email, role = %session.user.role, "login");
    state.sessions.set(session.clone());

    Ok(Json(ApiSuccess::new(LoginData {
        session,
        redirect_to,
    })))
}

/// `POST /api/auth/logout`
pub async fn logout(State(state): State<AppState>) -> Json<ApiSuccess<LogoutData>> {
    state.sessions.clear();
    info!("logout");
    Json(ApiSuccess::new(LogoutData { logged_out: true }))
}

/// `GET /api/auth/session`
pub async fn session(
    State(state): State<AppState>,
) -> Result<Json<ApiSuccess<AuthSession>>, ApiError> {
    state
        .sessions
        .get()
        .map(|session| Json(ApiSuccess::new(session)))
        .ok_or_else(ApiError::no_session)
}
