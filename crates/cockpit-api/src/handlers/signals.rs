//! Liquidity panel signal groups

use axum::extract::State;
use axum::Json;

use cockpit_signals::group_by_severity_tier;

use crate::fixtures;
use crate::models::{ApiSuccess, SignalGroupsData};
use crate::AppState;

/// `GET /api/signals/groups`
pub async fn groups(State(_state): State<AppState>) -> Json<ApiSuccess<SignalGroupsData>> {
    Json(ApiSuccess::new(SignalGroupsData {
        groups: group_by_severity_tier(fixtures::display_signals()),
    }))
}
