use axum::{
    body::{Body, to_bytes},
    http::{Request, Response, header::CONTENT_TYPE},
    middleware::Next,
    response::IntoResponse,
};

/// Handlers turn their own failures into a JSON `{ "error" }` body with a
/// generic message. Any other 5xx body (a framework or io error bubbling up)
/// may carry internal details, so it is logged and dropped here.
pub async fn mw_handle_leaked_5xx(request: Request<Body>, next: Next) -> Response<Body> {
    let response = next.run(request).await;
    let status = response.status();

    if !status.is_server_error() || is_json(&response) {
        return response;
    }

    match to_bytes(response.into_body(), usize::MAX).await {
        Ok(content) if !content.is_empty() => tracing::error!("{:?}", content),
        Err(e) => tracing::error!(
            "unable to convert INTERNAL_SERVER_ERROR response body to bytes :: {:?}",
            e
        ),
        _ => {}
    }

    status.into_response()
}

fn is_json(response: &Response<Body>) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}
