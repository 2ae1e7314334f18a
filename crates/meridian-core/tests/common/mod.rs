// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use meridian_core::{Explorer, ExplorerBuilder, WorldTimeClient};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Starts a mock time service with no routes mounted.
pub async fn start_time_service() -> MockServer {
    MockServer::start().await
}

/// Base URL of the mock service, as the real service's `/api` prefix.
pub fn base_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

/// Helper function to create a test explorer pointed at the mock service
pub fn create_test_explorer(server: &MockServer) -> Explorer<WorldTimeClient> {
    ExplorerBuilder::new()
        .with_base_url(Some(base_url(server)))
        .build()
        .expect("Failed to create explorer")
}

/// Mounts `GET /api/timezone` answering with the given zones.
pub async fn mount_zone_list(server: &MockServer, zones: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/api/timezone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(zones)))
        .mount(server)
        .await;
}

/// Mounts `GET /api/timezone/{zone}` answering with a detail payload.
pub async fn mount_zone_detail(server: &MockServer, zone: &str, datetime: &str, offset: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/timezone/{zone}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(detail_payload(zone, datetime, offset)),
        )
        .mount(server)
        .await;
}

/// A detail payload shaped like the real service's.
pub fn detail_payload(zone: &str, datetime: &str, offset: &str) -> Value {
    json!({
        "abbreviation": "BST",
        "client_ip": "203.0.113.9",
        "datetime": datetime,
        "day_of_week": 2,
        "day_of_year": 154,
        "dst": true,
        "dst_from": "2025-03-30T01:00:00+00:00",
        "dst_offset": 3600,
        "dst_until": "2025-10-26T01:00:00+00:00",
        "raw_offset": 0,
        "timezone": zone,
        "unixtime": 1748961900,
        "utc_datetime": "2025-06-03T14:45:00.000000+00:00",
        "utc_offset": offset,
        "week_number": 23
    })
}
