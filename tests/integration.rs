//! Integration tests for the roster engine.
//!
//! This test suite covers the full reporting pipeline end to end:
//! - Period resolution over both week conventions
//! - Upper-hour rounding and timezone overrides
//! - Roster aggregation with candidate reclassification
//! - Zero-filled weekly merge across configured units
//! - Unknown-position diagnostics
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use roster_engine::api::{AppState, create_router};
use roster_engine::config::ConfigLoader;
use roster_engine::models::{StaffMember, StaffMemberStatus};
use roster_engine::roster::{
    ClassificationDiagnostics, count_staff_by_position, merge_weekly_staff_counts,
    specialist_staff_ids,
};

// =============================================================================
// Test Helpers
// =============================================================================

// Identifiers from the checked-in config/roster reference data.
const UNIT_CENTRAL: &str = "8fc2eb89f8d34dd5bd0eb478ef4b0dd7";
const UNIT_RIVERSIDE: &str = "2a6c7f6031b24e60a7cf3b8dc53e1d54";
const POSITION_MANAGER: &str = "09b059ae5fceac4211eb7bf91936faa5";
const POSITION_SPECIALIST: &str = "000d3abf84c3bb2e11ebfc11012115db";
const POSITION_CANDIDATE: &str = "09b059ae5fceac4211eb7bf91936fe34";
const POSITION_COURIER: &str = "09b059ae5fceac4211eb7bf91936ff29";
const POSITION_SKIPPED: &str = "09b059ae5fceac4211eb7bf9193701a7";

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/roster").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn member(id: &str, unit: &str, status: &str, position: Option<&str>) -> Value {
    json!({
        "id": id,
        "unit_uuid": unit,
        "status": status,
        "position_id": position,
        "position_name": null
    })
}

fn assignment(staff_id: &str, position: &str, is_active: bool) -> Value {
    json!({
        "staff_id": staff_id,
        "unit_uuid": UNIT_CENTRAL,
        "position_id": position,
        "taken_on": "2024-06-03",
        "left_on": if is_active { Value::Null } else { json!("2024-12-01") },
        "is_active": is_active
    })
}

fn report_request(active: Vec<Value>, dismissed: Vec<Value>, history: Vec<Value>) -> Value {
    json!({
        "year": 2025,
        "week": 10,
        "month": 3,
        "active_members": active,
        "dismissed_members": dismissed,
        "positions_history": history
    })
}

fn report_for<'a>(body: &'a Value, unit_name: &str) -> &'a Value {
    body["reports"]
        .as_array()
        .expect("reports array")
        .iter()
        .find(|r| r["unit_name"] == unit_name)
        .expect("unit report")
}

// =============================================================================
// Weekly staff report
// =============================================================================

#[tokio::test]
async fn test_weekly_report_counts_and_reclassifies() {
    let candidate_id = "11111111111111111111111111111111";
    let request = report_request(
        vec![
            member("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", UNIT_CENTRAL, "active", Some(POSITION_MANAGER)),
            member(candidate_id, UNIT_CENTRAL, "active", Some(POSITION_CANDIDATE)),
        ],
        vec![],
        vec![assignment(candidate_id, POSITION_SPECIALIST, false)],
    );

    let (status, body) = post_json(create_router_for_test(), "/reports/weekly-staff", request).await;

    assert_eq!(status, StatusCode::OK);
    let central = report_for(&body, "Central");
    assert_eq!(central["active_managers_count"], 1);
    assert_eq!(central["active_specialists_count"], 1);
    assert_eq!(central["active_candidates_count"], 0);
    assert_eq!(body["unknown_positions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_candidate_without_history_stays_candidate() {
    let request = report_request(
        vec![member(
            "11111111111111111111111111111111",
            UNIT_CENTRAL,
            "active",
            Some(POSITION_CANDIDATE),
        )],
        vec![],
        vec![],
    );

    let (status, body) = post_json(create_router_for_test(), "/reports/weekly-staff", request).await;

    assert_eq!(status, StatusCode::OK);
    let central = report_for(&body, "Central");
    assert_eq!(central["active_candidates_count"], 1);
    assert_eq!(central["active_specialists_count"], 0);
}

#[tokio::test]
async fn test_every_configured_unit_is_reported() {
    let request = report_request(vec![], vec![], vec![]);

    let (status, body) = post_json(create_router_for_test(), "/reports/weekly-staff", request).await;

    assert_eq!(status, StatusCode::OK);
    let reports = body["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 4);
    for report in reports {
        assert_eq!(report["active_managers_count"], 0);
        assert_eq!(report["dismissed_specialists_count"], 0);
        assert_eq!(report["year"], 2025);
        assert_eq!(report["month"], 3);
        assert_eq!(report["week"], 10);
    }
}

#[tokio::test]
async fn test_dismissed_counts_are_separate() {
    let request = report_request(
        vec![member(
            "11111111111111111111111111111111",
            UNIT_RIVERSIDE,
            "active",
            Some(POSITION_COURIER),
        )],
        vec![member(
            "22222222222222222222222222222222",
            UNIT_RIVERSIDE,
            "dismissed",
            Some(POSITION_COURIER),
        )],
        vec![],
    );

    let (status, body) = post_json(create_router_for_test(), "/reports/weekly-staff", request).await;

    assert_eq!(status, StatusCode::OK);
    let riverside = report_for(&body, "Riverside");
    assert_eq!(riverside["active_couriers_count"], 1);
    assert_eq!(riverside["dismissed_couriers_count"], 1);
}

#[tokio::test]
async fn test_unknown_position_is_reported_not_counted() {
    let stray_position = "ffffffffffffffffffffffffffffffff";
    let request = report_request(
        vec![
            member("11111111111111111111111111111111", UNIT_CENTRAL, "active", Some(POSITION_MANAGER)),
            member("22222222222222222222222222222222", UNIT_CENTRAL, "active", Some(stray_position)),
        ],
        vec![],
        vec![],
    );

    let (status, body) = post_json(create_router_for_test(), "/reports/weekly-staff", request).await;

    assert_eq!(status, StatusCode::OK);
    let central = report_for(&body, "Central");
    assert_eq!(central["active_managers_count"], 1);

    let unknown = body["unknown_positions"].as_array().unwrap();
    assert_eq!(unknown.len(), 1);
    assert_eq!(
        unknown[0]["position_id"],
        "ffffffff-ffff-ffff-ffff-ffffffffffff"
    );
}

#[tokio::test]
async fn test_skipped_and_unpositioned_members_are_silently_excluded() {
    let request = report_request(
        vec![
            member("11111111111111111111111111111111", UNIT_CENTRAL, "active", Some(POSITION_SKIPPED)),
            member("22222222222222222222222222222222", UNIT_CENTRAL, "active", None),
        ],
        vec![],
        vec![],
    );

    let (status, body) = post_json(create_router_for_test(), "/reports/weekly-staff", request).await;

    assert_eq!(status, StatusCode::OK);
    let central = report_for(&body, "Central");
    assert_eq!(central["active_managers_count"], 0);
    assert_eq!(central["active_candidates_count"], 0);
    assert_eq!(body["unknown_positions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_unconfigured_unit_is_dropped_from_output() {
    let request = report_request(
        vec![member(
            "11111111111111111111111111111111",
            "deadbeefdeadbeefdeadbeefdeadbeef",
            "active",
            Some(POSITION_MANAGER),
        )],
        vec![],
        vec![],
    );

    let (status, body) = post_json(create_router_for_test(), "/reports/weekly-staff", request).await;

    assert_eq!(status, StatusCode::OK);
    let reports = body["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 4);
    for report in reports {
        assert_eq!(report["active_managers_count"], 0);
    }
}

#[tokio::test]
async fn test_month_is_derived_from_week_when_omitted() {
    let request = json!({
        "year": 2025,
        "week": 6,
        "active_members": [],
        "dismissed_members": [],
        "positions_history": []
    });

    let (status, body) = post_json(create_router_for_test(), "/reports/weekly-staff", request).await;

    assert_eq!(status, StatusCode::OK);
    // Week 6 of 2025 starts on Monday 2025-02-03.
    assert_eq!(body["reports"][0]["month"], 2);
}

#[tokio::test]
async fn test_report_week_out_of_range_is_rejected() {
    let request = json!({
        "year": 2025,
        "week": 54,
        "active_members": [],
        "dismissed_members": [],
        "positions_history": []
    });

    let (status, body) = post_json(create_router_for_test(), "/reports/weekly-staff", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_year_is_rejected() {
    let request = json!({ "week": 10 });

    let (status, body) = post_json(create_router_for_test(), "/reports/weekly-staff", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reports/weekly-staff")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

// =============================================================================
// Period resolution
// =============================================================================

#[tokio::test]
async fn test_resolve_month_uses_configured_timezone() {
    let request = json!({
        "selector": {"type": "month", "year": 2025, "month": 3}
    });

    let (status, body) = post_json(create_router_for_test(), "/periods/resolve", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["from"], "2025-03-01T00:00:00+03:00");
    assert_eq!(body["to"], "2025-03-31T23:59:59+03:00");
}

#[tokio::test]
async fn test_resolve_month_week_clamps_to_month_end() {
    let request = json!({
        "selector": {"type": "month_week", "year": 2023, "month": 2, "week": 4}
    });

    let (status, body) = post_json(create_router_for_test(), "/periods/resolve", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["from"], "2023-02-22T00:00:00+03:00");
    assert_eq!(body["to"], "2023-02-28T23:59:59+03:00");
}

#[tokio::test]
async fn test_resolve_week_5_of_short_february_fails() {
    let request = json!({
        "selector": {"type": "month_week", "year": 2023, "month": 2, "week": 5}
    });

    let (status, body) = post_json(create_router_for_test(), "/periods/resolve", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_resolve_iso_week_normalizes_to_monday() {
    let request = json!({
        "selector": {"type": "iso_week", "year": 2025, "week": 1},
        "timezone": "UTC"
    });

    let (status, body) = post_json(create_router_for_test(), "/periods/resolve", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["from"], "2024-12-30T00:00:00+00:00");
    assert_eq!(body["to"], "2025-01-05T23:59:59+00:00");
}

#[tokio::test]
async fn test_resolve_with_timezone_override_and_rounding() {
    let request = json!({
        "selector": {"type": "month", "year": 2025, "month": 2},
        "timezone": "Europe/Berlin",
        "round_to_upper_hour": true
    });

    let (status, body) = post_json(create_router_for_test(), "/periods/resolve", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["from"], "2025-02-01T00:00:00+01:00");
    assert_eq!(body["to"], "2025-03-01T00:00:00+01:00");
}

#[tokio::test]
async fn test_resolve_with_unknown_timezone_fails() {
    let request = json!({
        "selector": {"type": "month", "year": 2025, "month": 2},
        "timezone": "Mars/Olympus_Mons"
    });

    let (status, body) = post_json(create_router_for_test(), "/periods/resolve", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_TIMEZONE");
}

#[tokio::test]
async fn test_resolve_iso_week_out_of_range_fails() {
    for week in [0, 54] {
        let request = json!({
            "selector": {"type": "iso_week", "year": 2025, "week": week}
        });

        let (status, body) =
            post_json(create_router_for_test(), "/periods/resolve", request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "week {week} should fail");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

// =============================================================================
// Library pipeline without HTTP
// =============================================================================

#[test]
fn test_full_pipeline_through_library_calls() {
    let config = ConfigLoader::load("./config/roster").expect("Failed to load config");
    let units = config.units();

    let manager_position = POSITION_MANAGER.parse().unwrap();
    let candidate_position = POSITION_CANDIDATE.parse().unwrap();
    let specialist_position = POSITION_SPECIALIST.parse().unwrap();

    let candidate = StaffMember {
        id: "11111111111111111111111111111111".parse().unwrap(),
        unit_uuid: units[0].uuid,
        status: StaffMemberStatus::Active,
        position_id: Some(candidate_position),
        position_name: Some("Candidate".to_string()),
    };
    let manager = StaffMember {
        id: "22222222222222222222222222222222".parse().unwrap(),
        unit_uuid: units[0].uuid,
        status: StaffMemberStatus::Active,
        position_id: Some(manager_position),
        position_name: Some("Shift manager".to_string()),
    };

    let history = vec![roster_engine::models::PositionAssignment {
        staff_id: candidate.id,
        unit_uuid: units[0].uuid,
        position_id: specialist_position,
        taken_on: chrono::NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        left_on: None,
        is_active: true,
    }];

    let specialist_ids = specialist_staff_ids(&history, config.positions());
    let mut diagnostics = ClassificationDiagnostics::new();

    let active = vec![manager, candidate];
    let active_counts = count_staff_by_position(
        &active,
        config.positions(),
        Some(&specialist_ids),
        &mut diagnostics,
    );
    let dismissed_counts = count_staff_by_position(
        &[],
        config.positions(),
        Some(&specialist_ids),
        &mut diagnostics,
    );

    let reports =
        merge_weekly_staff_counts(units, &active_counts, &dismissed_counts, 2025, 3, 2);

    assert_eq!(reports.len(), units.len());
    assert_eq!(reports[0].active_managers_count, 1);
    assert_eq!(reports[0].active_specialists_count, 1);
    assert_eq!(reports[0].active_candidates_count, 0);
    assert_eq!(diagnostics.unknown_count(), 0);

    // Units without data are zero-filled.
    assert_eq!(reports[1].active_managers_count, 0);
    assert_eq!(reports[1].new_candidates_count, 0);
}
