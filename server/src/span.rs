use http::Request;
use middleware::ClientIp;
use tracing::Span;

pub fn span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("<unknown-request-id>");

    let client_ip = request
        .extensions()
        .get::<ClientIp>()
        .copied()
        .unwrap_or(ClientIp(None));

    // `error_span!` so the request context survives even when the filter
    // only lets warnings and errors through.
    tracing::error_span!(
        "request",
        "{} {} {} {}",
        client_ip,
        request_id,
        request.method(),
        request.uri(),
    )
}
