pub mod api;
mod span;

use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use contextual::Context;
use extra::Redacted;
use notion::{Credentials, NotionClient, RecordSource};
use reqwest::Url;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use api::check_rank::{CheckRankError, ResponseBody, TIER_PROPERTIES};

#[derive(Debug)]
pub struct ServerOpts {
    pub host: IpAddr,
    pub port: u16,
    pub notion: NotionOpts,

    /// Static UI assets served for every path the api doesn't claim.
    pub ui_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct NotionOpts {
    pub api_key: Option<Redacted<String>>,
    pub database_id: Option<String>,
    pub base_url: Url,
    pub timeout: Duration,
}

impl NotionOpts {
    /// `None` when either the key or the database id is missing or blank.
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_parts(
            self.api_key.as_ref().map(Redacted::reveal),
            self.database_id.clone(),
        )
    }
}

#[derive(Clone)]
pub struct AppState {
    /// `None` means the server is running without credentials and every
    /// lookup answers with a configuration error.
    pub records: Option<Arc<dyn RecordSource>>,
}

impl AppState {
    pub fn new(records: impl RecordSource + 'static) -> Self {
        Self {
            records: Some(Arc::new(records)),
        }
    }

    pub fn unconfigured() -> Self {
        Self { records: None }
    }
}

pub fn server(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(middleware::mw_client_ip))
        .layer(TraceLayer::new_for_http().make_span_with(span::span))
        .layer(from_fn(middleware::latency_ms))
        .layer(from_fn(middleware::mw_handle_leaked_5xx));

    Router::new()
        .route(api::check_rank::PATH, post(api::check_rank::handler))
        .route(api::health::PATH, get(api::health::handler))
        .with_state(state)
        .layer(middleware)
}

pub async fn serve(opts: ServerOpts) -> Result<(), ServerError> {
    tracing::info!("{:?}", opts);

    let state = match opts.notion.credentials() {
        Some(credentials) => {
            tracing::info!(database_id = %credentials.database_id, "notion lookups enabled");
            AppState::new(
                NotionClient::new(&opts.notion.base_url, opts.notion.timeout, credentials)
                    .context("build notion client")?,
            )
        }
        None => {
            tracing::warn!(
                api_key = opts.notion.api_key.is_some(),
                database_id = opts.notion.database_id.is_some(),
                "notion credentials incomplete, every lookup will fail"
            );
            AppState::unconfigured()
        }
    };

    let server = server(state);
    let server = match &opts.ui_dir {
        Some(ui_dir) => server.fallback_service(ServeDir::new(ui_dir)),
        None => server,
    };

    let app = server.into_make_service_with_connect_info::<SocketAddr>();

    let addr = SocketAddr::from((opts.host, opts.port));
    let listener = TcpListener::bind(addr)
        .await
        .context(format!("bind :: {addr}"))?;
    tracing::info!(
        "listening on {}",
        listener.local_addr().context("local_addr")?
    );
    axum::serve(listener, app)
        .await
        .context("axum::serve")
        .map_err(|e| e.into())
}

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    Notion(#[from] contextual::Error<notion::ClientError>),

    #[error("{0}")]
    Io(#[from] contextual::Error<std::io::Error>),
}
