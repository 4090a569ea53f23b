use server::AppState;

use super::records::FakeRecords;

pub fn state(records: &FakeRecords) -> AppState {
    AppState::new(records.clone())
}

static TRACING_INIT: std::sync::Once = std::sync::Once::new();

pub fn tracing_init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}

pub async fn json_body<T>(response: axum::http::Response<axum::body::Body>) -> T
where
    T: serde::de::DeserializeOwned,
{
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("unable to read response body");

    serde_json::from_slice::<T>(&body_bytes).expect("unable to deserialize response body")
}
