//! Tests for the lifecycle store.

use super::*;
use crate::models::FetchStatus;

fn zones(names: &[&str]) -> Vec<ZoneId> {
    names.iter().copied().map(ZoneId::new).collect()
}

fn detail(zone: &str, datetime: &str) -> ZoneDetail {
    ZoneDetail::new(ZoneId::new(zone), datetime, "+00:00")
}

#[test]
fn test_new_state_is_idle() {
    let state = TimeZoneState::new();
    assert_eq!(state.list().status(), FetchStatus::Idle);
    assert_eq!(state.detail().status(), FetchStatus::Idle);
    assert!(state.latest_ticket().is_none());
    assert!(state.is_consistent());
}

#[test]
fn test_list_fetch_succeeded_stores_zones() {
    let mut state = TimeZoneState::new();
    let loaded = zones(&["Africa/Abidjan", "Europe/London", "Europe/London"]);

    state.list_fetch_started();
    assert_eq!(state.list().status(), FetchStatus::Loading);

    state.list_fetch_succeeded(loaded.clone());
    assert_eq!(state.list().status(), FetchStatus::Success);
    assert_eq!(state.list().data(), Some(&loaded));
    assert!(state.list().error().is_none());
}

#[test]
fn test_list_fetch_started_keeps_previous_zones() {
    let mut state = TimeZoneState::new();
    state.list_fetch_succeeded(zones(&["Europe/London"]));
    state.list_fetch_started();
    assert_eq!(state.list().status(), FetchStatus::Loading);
    assert_eq!(state.list().data().map(Vec::len), Some(1));

    state.list_fetch_failed("Network Error".to_string());
    state.list_fetch_started();
    assert_eq!(state.list().status(), FetchStatus::Loading);
    assert!(state.list().error().is_none());
    assert_eq!(state.list().data(), Some(&Vec::new()));
}

#[test]
fn test_list_fetch_failed_empties_list_regardless_of_prior_data() {
    let mut state = TimeZoneState::new();
    state.list_fetch_started();
    state.list_fetch_succeeded(zones(&["Europe/London", "Asia/Tokyo"]));

    state.list_fetch_failed("Network Error".to_string());
    assert_eq!(state.list().status(), FetchStatus::Error);
    assert_eq!(state.list().data(), Some(&Vec::new()));
    assert_eq!(state.list().error(), Some("Network Error"));

    let mut fresh = TimeZoneState::new();
    fresh.list_fetch_failed("Network Error".to_string());
    assert_eq!(fresh.list(), state.list());
}

#[test]
fn test_detail_fetch_started_clears_previous_outcome() {
    let mut state = TimeZoneState::new();

    state.detail_fetch_started();
    state.detail_fetch_succeeded(detail("Europe/London", "2025-06-03T14:45:00+00:00"));
    state.detail_fetch_started();
    assert_eq!(state.detail().status(), FetchStatus::Loading);
    assert!(state.detail().data().is_none());
    assert!(state.detail().error().is_none());

    state.detail_fetch_failed("Request failed with status code 500".to_string());
    state.detail_fetch_started();
    assert_eq!(state.detail().status(), FetchStatus::Loading);
    assert!(state.detail().data().is_none());
    assert!(state.detail().error().is_none());
}

#[test]
fn test_detail_outcomes() {
    let mut state = TimeZoneState::new();
    let london = detail("Europe/London", "2025-06-03T14:45:00+00:00");

    state.detail_fetch_started();
    state.detail_fetch_succeeded(london.clone());
    assert_eq!(state.detail().status(), FetchStatus::Success);
    assert_eq!(state.detail().data(), Some(&london));

    state.detail_fetch_failed("timeout".to_string());
    assert_eq!(state.detail().status(), FetchStatus::Error);
    assert!(state.detail().data().is_none());
    assert_eq!(state.detail().error(), Some("timeout"));
}

#[test]
fn test_new_detail_supersedes_old_one() {
    let mut state = TimeZoneState::new();
    state.detail_fetch_started();
    state.detail_fetch_succeeded(detail("Europe/London", "2025-06-03T14:45:00+00:00"));
    state.detail_fetch_started();
    state.detail_fetch_succeeded(detail("Asia/Tokyo", "2025-06-03T14:45:00+00:00"));

    let held = state.detail().data().unwrap();
    assert_eq!(held.timezone, "Asia/Tokyo");
}

#[test]
fn test_stale_tickets_are_discarded() {
    let mut state = TimeZoneState::new();
    let first = state.detail_fetch_started();
    let second = state.detail_fetch_started();
    assert!(first < second);
    assert!(!state.is_current(first));
    assert!(state.is_current(second));
    assert_eq!(state.latest_ticket(), Some(second));

    let tokyo = detail("Asia/Tokyo", "2025-06-03T14:45:00+00:00");
    assert!(state.detail_fetch_succeeded_for(second, tokyo.clone()));

    // The earlier request finishing afterwards changes nothing.
    assert!(!state.detail_fetch_succeeded_for(
        first,
        detail("Europe/London", "2025-06-03T14:45:00+00:00")
    ));
    assert!(!state.detail_fetch_failed_for(first, "Network Error".to_string()));
    assert_eq!(state.detail().data(), Some(&tokyo));
    assert!(state.detail().error().is_none());
}

#[test]
fn test_list_and_detail_are_independent() {
    let mut state = TimeZoneState::new();
    state.list_fetch_started();
    state.list_fetch_failed("Network Error".to_string());

    let ticket = state.detail_fetch_started();
    assert!(state.detail_fetch_succeeded_for(
        ticket,
        detail("Europe/London", "2025-06-03T14:45:00+00:00")
    ));

    assert_eq!(state.list().status(), FetchStatus::Error);
    assert_eq!(state.list().error(), Some("Network Error"));
    assert_eq!(state.detail().status(), FetchStatus::Success);
    assert!(state.is_consistent());
}

#[test]
fn test_state_serialization_round_trip() {
    let mut state = TimeZoneState::new();
    state.list_fetch_succeeded(zones(&["Europe/London"]));
    let ticket = state.detail_fetch_started();
    state.detail_fetch_failed_for(ticket, "Network Error".to_string());

    let json = serde_json::to_string(&state).unwrap();
    let restored: TimeZoneState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
    assert_eq!(restored.latest_ticket(), Some(ticket));
}

#[test]
fn test_default_ticket_is_never_current() {
    let mut state = TimeZoneState::new();
    assert!(!state.is_current(RequestTicket::default()));

    let ticket = state.detail_fetch_started();
    assert!(state.is_current(ticket));
    assert!(!state.detail_fetch_failed_for(RequestTicket::default(), "boom".to_string()));
    assert!(state.detail().is_loading());
}

#[test]
fn test_handle_update_returns_transition_result() {
    let store = StoreHandle::new();
    let ticket = store.update(|state| state.detail_fetch_started());
    assert_eq!(ticket.epoch(), 1);
    assert!(store.read(|state| state.is_current(ticket)));
}

#[tokio::test]
async fn test_handle_notifies_subscribers() {
    let store = StoreHandle::new();
    let mut rx = store.subscribe();

    store.update(|state| state.list_fetch_started());
    rx.changed().await.expect("store dropped");
    assert!(rx.borrow_and_update().list().is_loading());

    store.update(|state| state.list_fetch_succeeded(zones(&["Europe/London"])));
    rx.changed().await.expect("store dropped");
    assert_eq!(rx.borrow_and_update().list().data().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_handle_update_if_skips_stale_notifications() {
    let store = StoreHandle::new();
    let first = store.update(|state| state.detail_fetch_started());
    let second = store.update(|state| state.detail_fetch_started());

    let rx = store.subscribe();
    let applied = store.update_if(|state| {
        state.detail_fetch_succeeded_for(
            first,
            detail("Europe/London", "2025-06-03T14:45:00+00:00"),
        )
    });
    assert!(!applied);
    assert!(!rx.has_changed().unwrap());

    let applied =
        store.update_if(|state| state.detail_fetch_failed_for(second, "boom".to_string()));
    assert!(applied);
    assert!(rx.has_changed().unwrap());
    assert_eq!(
        store.read(|state| state.detail().error().map(str::to_string)),
        Some("boom".to_string())
    );
}

#[test]
fn test_handle_clones_share_state() {
    let store = StoreHandle::new();
    let other = store.clone();
    other.update(|state| state.list_fetch_failed("Network Error".to_string()));
    assert_eq!(store.snapshot().list().error(), Some("Network Error"));
}
