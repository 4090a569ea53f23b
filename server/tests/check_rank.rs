mod shared;

use extra::ErrorResponse;
use serde_json::json;
use server::{AppState, ResponseBody, api::check_rank::BODY_LIMIT};
use shared::{
    records::FakeRecords,
    request::{check_rank, check_rank_bytes, check_rank_raw, health},
    setup::{json_body, state, tracing_init},
};
use test_proc_macros::email;

fn page(properties: serde_json::Value) -> serde_json::Value {
    json!({ "object": "page", "id": "59833787-2cf9-4fdf-8782-e53db20768a5", "properties": properties })
}

async fn error_message(response: axum::http::Response<axum::body::Body>) -> String {
    json_body::<ErrorResponse>(response).await.error
}

#[tokio::test]
async fn gold_tier() {
    tracing_init();

    let records = FakeRecords::with_records(vec![page(json!({
        "Email": { "type": "email", "email": "creator@example.com" },
        "Tier": { "type": "select", "select": { "name": "Gold" } },
    }))]);
    let state = state(&records);

    let response = t!( send!(state check_rank(email!("creator@example.com"))) => status!(200) );
    let body = json_body::<serde_json::Value>(response).await;

    assert_eq!(body, json!({ "tier": "Gold" }));
}

#[tokio::test]
async fn rank_property_is_the_fallback() {
    tracing_init();

    let records = FakeRecords::with_records(vec![page(json!({
        "Rank": { "type": "select", "select": { "name": "Silver" } },
    }))]);
    let state = state(&records);

    let response = t!( send!(state check_rank(email!("creator@example.com"))) => status!(200) );
    assert_eq!(json_body::<ResponseBody>(response).await.tier.as_str(), "Silver");
}

#[tokio::test]
async fn unknown_when_no_select_is_populated() {
    tracing_init();

    let records = FakeRecords::with_records(vec![page(json!({
        "Tier": { "type": "select", "select": null },
        "Name": { "type": "title", "title": [] },
    }))]);
    let state = state(&records);

    let response = t!( send!(state check_rank(email!("creator@example.com"))) => status!(200) );
    let body = json_body::<serde_json::Value>(response).await;

    assert_eq!(body, json!({ "tier": "Unknown" }));
}

#[tokio::test]
async fn first_record_wins() {
    tracing_init();

    let records = FakeRecords::with_records(vec![
        page(json!({ "Tier": { "select": { "name": "Platinum" } } })),
        page(json!({ "Tier": { "select": { "name": "Bronze" } } })),
    ]);
    let state = state(&records);

    let response = t!( send!(state check_rank(email!("creator@example.com"))) => status!(200) );
    assert_eq!(json_body::<ResponseBody>(response).await.tier.as_str(), "Platinum");
}

#[tokio::test]
async fn lookup_is_case_insensitive() {
    tracing_init();

    let records = FakeRecords::empty();
    let state = state(&records);

    t!( send!(state check_rank(email!("Creator@Example.COM"))) => status!(404) );

    assert_eq!(records.queries(), vec!["creator@example.com".to_string()]);
}

#[tokio::test]
async fn not_found() {
    tracing_init();

    let records = FakeRecords::empty();
    let state = state(&records);

    let response = t!( send!(state check_rank(email!("nobody@example.com"))) => status!(404) );

    assert_eq!(
        error_message(response).await,
        "Email not found in database. Please check and try again."
    );
}

#[tokio::test]
async fn malformed_email_is_rejected_before_lookup() {
    tracing_init();

    let records = FakeRecords::empty();
    let state = state(&records);

    for email in ["", "plainaddress", "a@b", "a b@c.d", "a@@b.c", "@b.c", "a@b.c "] {
        let response = t!( send!(state check_rank(email)) => status!(400) );
        let message = error_message(response).await;
        assert!(
            message == "Please enter a valid email address" || message == "Invalid email format",
            "{email:?} :: {message}"
        );
    }

    assert!(records.queries().is_empty());
}

#[tokio::test]
async fn missing_or_non_string_email() {
    tracing_init();

    let records = FakeRecords::empty();
    let state = state(&records);

    for body in [
        json!({}),
        json!({ "email": null }),
        json!({ "email": 42 }),
        json!({ "email": ["creator@example.com"] }),
        json!({ "email": "" }),
        json!("creator@example.com"),
    ] {
        let response = t!( send!(state check_rank_raw(body.clone())) => status!(400) );
        assert_eq!(error_message(response).await, "Invalid email format", "{body}");
    }
}

#[tokio::test]
async fn unparseable_body_is_unexpected() {
    tracing_init();

    let records = FakeRecords::empty();
    let state = state(&records);

    let response = t!( send!(state check_rank_bytes("{\"email\": ")) => status!(500) );
    assert_eq!(
        error_message(response).await,
        "An unexpected error occurred. Please try again."
    );
}

#[tokio::test]
async fn missing_configuration_wins_over_everything() {
    tracing_init();

    let state = AppState::unconfigured();

    for request in [
        check_rank(email!("creator@example.com")),
        check_rank("not-an-email"),
        check_rank_bytes("garbage"),
    ] {
        let response = t!( send!(state request) => status!(500) );
        assert_eq!(
            error_message(response).await,
            "Server configuration incomplete. Please contact support."
        );
    }
}

fn oversized_body() -> String {
    format!(r#"{{"email":"{}@example.com"}}"#, "a".repeat(BODY_LIMIT + 1))
}

#[tokio::test]
async fn oversized_body_without_configuration() {
    tracing_init();

    let state = AppState::unconfigured();

    let response = t!( send!(state check_rank_bytes(oversized_body())) => status!(500) );
    assert_eq!(
        error_message(response).await,
        "Server configuration incomplete. Please contact support."
    );
}

#[tokio::test]
async fn oversized_body_is_unexpected() {
    tracing_init();

    let records = FakeRecords::empty();
    let state = state(&records);

    let response = t!( send!(state check_rank_bytes(oversized_body())) => status!(500) );
    assert_eq!(
        error_message(response).await,
        "An unexpected error occurred. Please try again."
    );
    assert!(records.queries().is_empty());
}

#[tokio::test]
async fn upstream_failure_is_generic() {
    tracing_init();

    let records = FakeRecords::failing_with_status(404);
    let state = state(&records);

    let response = t!( send!(state check_rank(email!("creator@example.com"))) => status!(500) );
    let message = error_message(response).await;

    assert_eq!(message, "Unable to search database. Please try again.");
    assert!(!message.contains("object_not_found"));
}

#[tokio::test]
async fn transport_failure_is_unexpected() {
    tracing_init();

    let records = FakeRecords::unreachable();
    let state = state(&records);

    let response = t!( send!(state check_rank(email!("creator@example.com"))) => status!(500) );
    assert_eq!(
        error_message(response).await,
        "An unexpected error occurred. Please try again."
    );
}

#[tokio::test]
async fn repeated_lookups_agree() {
    tracing_init();

    let records = FakeRecords::with_records(vec![page(json!({
        "Tier": { "select": { "name": "Bronze" } },
    }))]);
    let state = state(&records);

    for _ in 0..3 {
        let response =
            t!( send!(state check_rank(email!("creator@example.com"))) => status!(success) );
        assert_eq!(json_body::<ResponseBody>(response).await.tier.as_str(), "Bronze");
    }

    assert_eq!(records.queries().len(), 3);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    tracing_init();

    let state = AppState::unconfigured();

    let response = t!( send!(state health()) => status!(200) );
    assert!(response.headers().contains_key("x-request-id"));
}
