//! Data source monitoring endpoint integration tests

mod common;

use axum::http::StatusCode;
use common::{get_json, post_json, test_app};
use serde_json::json;

#[tokio::test]
async fn status_lists_sources_with_aggregate_stats() {
    let app = test_app();
    let (status, body) = get_json(app, "/api/data-sources/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["sources"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["stats"]["totalSources"], 5);
    assert_eq!(body["data"]["stats"]["totalRecordsToday"], 31509);
}

#[tokio::test]
async fn metrics_without_source_returns_overview() {
    let app = test_app();
    let (status, body) = get_json(app, "/api/data-sources/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["aggregated"]["recordsProcessed"].is_number());
    assert!(body["data"]["bySource"]["exchange-data"].is_object());
}

#[tokio::test]
async fn metrics_for_one_source() {
    let app = test_app();
    let (status, body) = get_json(app, "/api/data-sources/metrics?sourceId=zauba-corp").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sourceId"], "zauba-corp");
    assert_eq!(body["data"]["sourceName"], "Zauba Corp");
    assert_eq!(body["data"]["recordsProcessed"], 8671);
}

#[tokio::test]
async fn unknown_source_is_404_with_code() {
    let app = test_app();
    let (status, body) = get_json(app, "/api/data-sources/metrics?sourceId=bloomberg").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "SOURCE_NOT_FOUND");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("'bloomberg'"));
}

#[tokio::test]
async fn conflicts_default_returns_all_with_summary() {
    let app = test_app();
    let (status, body) = get_json(app, "/api/data-sources/conflicts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["conflicts"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["summary"]["total"], 5);
    assert_eq!(body["data"]["summary"]["pending"], 2);
    assert_eq!(body["data"]["summary"]["resolved"], 2);
    assert_eq!(body["data"]["summary"]["escalated"], 1);
}

#[tokio::test]
async fn conflicts_filter_by_status_keeps_full_summary() {
    let app = test_app();
    let (status, body) = get_json(app, "/api/data-sources/conflicts?status=pending").await;

    assert_eq!(status, StatusCode::OK);
    let conflicts = body["data"]["conflicts"].as_array().unwrap();
    assert_eq!(conflicts.len(), 2);
    assert!(conflicts.iter().all(|c| c["status"] == "pending"));
    // summary still counts every conflict, not the filtered view
    assert_eq!(body["data"]["summary"]["total"], 5);
}

#[tokio::test]
async fn resolving_requires_both_fields() {
    let app = test_app();
    let (status, body) = post_json(
        app,
        "/api/data-sources/conflicts",
        json!({"conflictId": "c-001"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(
        body["error"]["message"],
        "conflictId and selectedValue are required"
    );
}

#[tokio::test]
async fn resolving_unknown_conflict_is_404() {
    let app = test_app();
    let (status, body) = post_json(
        app,
        "/api/data-sources/conflicts",
        json!({"conflictId": "c-999", "selectedValue": "₹450 Cr"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "CONFLICT_NOT_FOUND");
}

#[tokio::test]
async fn resolving_echoes_the_resolution() {
    let app = test_app();
    let (status, body) = post_json(
        app,
        "/api/data-sources/conflicts",
        json!({
            "conflictId": "c-001",
            "selectedValue": "₹512 Cr",
            "overrideSources": ["Exchange Data"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["conflictId"], "c-001");
    assert_eq!(body["data"]["status"], "resolved");
    assert_eq!(body["data"]["resolution"]["selectedValue"], "₹512 Cr");
    // reasoning defaults when the caller gives none
    assert_eq!(
        body["data"]["resolution"]["reasoning"],
        "Manual resolution by admin"
    );
    assert_eq!(
        body["data"]["resolution"]["overrideSources"],
        json!(["Exchange Data"])
    );
}
