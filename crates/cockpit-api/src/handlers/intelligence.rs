//! Manual intelligence intake endpoint

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use rand::Rng;
use tracing::info;

use cockpit_signals::{build_signal, IntelligenceForm};

use crate::error::ApiError;
use crate::models::{ApiSuccess, CreateIntelligenceData};
use crate::AppState;

/// `POST /api/intelligence`
///
/// Validates the form, files the signal and reports the (mock) lead
/// score recalculation. Every rejected submission answers 400
/// `VALIDATION_ERROR` with the first failing rule's message.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<IntelligenceForm>, JsonRejection>,
) -> Result<Json<ApiSuccess<CreateIntelligenceData>>, ApiError> {
    let Json(form) = body.map_err(|_| ApiError::validation("Invalid form data"))?;
    form.validate().map_err(ApiError::validation)?;

    // Filing RM comes from the live session when there is one; the
    // client lookup arrives with the real datastore.
    let added_by_rm = state
        .sessions
        .get()
        .map(|session| {
            session
                .user
                .rm_id
                .unwrap_or(session.user.id)
        })
        .unwrap_or_else(|| "current-rm-id".to_string());

    let signal = build_signal(&form, "Client", &added_by_rm);
    let new_lead_score: u8 = rand::rng().random_range(75..95);

    info!(
        signal_id = %signal.id,
        event_type = signal.event_type.wire_name(),
        added_by_rm = %added_by_rm,
        "manual intelligence filed"
    );

    Ok(Json(ApiSuccess::new(CreateIntelligenceData {
        signal_id: signal.id,
        lead_score_updated: true,
        new_lead_score: Some(new_lead_score),
    })))
}
