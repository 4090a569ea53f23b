use std::{
    fmt::Display,
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, Response, header::FORWARDED},
    middleware::Next,
};
use forwarded_header_value::{ForwardedHeaderValue, Identifier};

/// Best-effort address of the visitor, stored in the request extensions.
/// Behind a proxy the remotest `Forwarded: for=` wins over the socket peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub Option<IpAddr>);

impl Display for ClientIp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(ip) => write!(f, "{ip}"),
            None => write!(f, "<unknown-client-ip>"),
        }
    }
}

pub async fn mw_client_ip(mut request: Request<Body>, next: Next) -> Response<Body> {
    let ip = ClientIp(client_ip(&request));
    request.extensions_mut().insert(ip);
    next.run(request).await
}

fn client_ip<B>(request: &Request<B>) -> Option<IpAddr> {
    forwarded_for(request).or_else(|| {
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|connect_info| connect_info.0.ip())
    })
}

fn forwarded_for<B>(request: &Request<B>) -> Option<IpAddr> {
    let header = request.headers().get(FORWARDED)?.to_str().ok()?;
    let forwarded = ForwardedHeaderValue::from_str(header).ok()?;
    match forwarded.into_remotest().forwarded_for? {
        Identifier::SocketAddr(socket_addr) => Some(socket_addr.ip()),
        Identifier::IpAddr(ip_addr) => Some(ip_addr),
        _ => None,
    }
}
