//! Trigger panel endpoints: filtered listing and CSV export

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use cockpit_core::TimelineFilter;
use cockpit_signals::{filter_by_timeline, format_amount_crores, total_amount, write_csv};

use crate::error::ApiError;
use crate::models::{ApiSuccess, TriggerListData};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TriggersQuery {
    timeline: Option<String>,
}

fn parse_filter(params: &TriggersQuery) -> Result<TimelineFilter, ApiError> {
    match params.timeline.as_deref() {
        None => Ok(TimelineFilter::All),
        Some(raw) => raw.parse().map_err(ApiError::from),
    }
}

/// `GET /api/triggers`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TriggersQuery>,
) -> Result<Json<ApiSuccess<TriggerListData>>, ApiError> {
    let filter = parse_filter(&params)?;
    let book = state.triggers.all().await;
    let filtered = filter_by_timeline(&book, filter);
    let total_in_play = total_amount(filtered.iter().copied());

    debug!(%filter, count = filtered.len(), total_in_play, "trigger panel query");

    Ok(Json(ApiSuccess::new(TriggerListData {
        count: filtered.len(),
        total_in_play,
        total_in_play_display: format_amount_crores(total_in_play),
        triggers: filtered.into_iter().cloned().collect(),
    })))
}

/// `GET /api/triggers/export`
///
/// Streams the filtered book as a CSV attachment. Empty filtered sets
/// are a 400 (no header row can be derived); the whole endpoint 404s
/// when exports are disabled by config.
pub async fn export(
    State(state): State<AppState>,
    Query(params): Query<TriggersQuery>,
) -> Result<Response, ApiError> {
    if !state.config.export_enabled {
        return Err(ApiError::new(
            axum::http::StatusCode::NOT_FOUND,
            "EXPORT_DISABLED",
            "CSV export is disabled",
        ));
    }

    let filter = parse_filter(&params)?;
    let book = state.triggers.all().await;
    let filtered = filter_by_timeline(&book, filter);
    let csv = write_csv(filtered)?;

    let disposition = format!(
        "attachment; filename=\"liquidity-triggers-{}.csv\"",
        filter
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}
