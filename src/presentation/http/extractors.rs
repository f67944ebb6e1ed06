// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AdminActor, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::{convert::Infallible, net::SocketAddr};

use super::error::HttpError;

/// Where the rate-limit key for a request comes from.
///
/// `FirstForwarded` trusts the left-most `X-Forwarded-For` hop, which the
/// client controls when the proxy appends to an incoming header (nginx
/// `proxy_add_x_forwarded_for`). Behind such a proxy use `LastForwarded`,
/// and use `Peer` when the service is reachable directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClientIpSource {
    #[default]
    FirstForwarded,
    LastForwarded,
    Peer,
}

impl ClientIpSource {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first-forwarded" => Some(Self::FirstForwarded),
            "last-forwarded" => Some(Self::LastForwarded),
            "peer" => Some(Self::Peer),
            _ => None,
        }
    }
}

/// Rate-limit key for the caller, chosen according to the router's
/// [`ClientIpSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKey(pub String);

const UNKNOWN_CLIENT: &str = "unknown";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn forwarded_hop(parts: &Parts, source: ClientIpSource) -> Option<String> {
    let forwarded = header_str(&parts.headers, "x-forwarded-for")?;
    let mut hops = forwarded.split(',').map(str::trim).filter(|hop| !hop.is_empty());
    let hop = match source {
        ClientIpSource::LastForwarded => hops.next_back(),
        _ => hops.next(),
    };
    hop.map(str::to_string)
}

pub fn client_key_from_parts(parts: &Parts, source: ClientIpSource) -> String {
    if source != ClientIpSource::Peer {
        if let Some(hop) = forwarded_hop(parts, source) {
            return hop;
        }
        if let Some(real_ip) = header_str(&parts.headers, "x-real-ip") {
            return real_ip.to_string();
        }
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

impl<S> FromRequestParts<S> for ClientKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let source = parts
            .extensions
            .get::<HttpState>()
            .map(|state| state.client_ip_source)
            .unwrap_or_default();
        Ok(Self(client_key_from_parts(parts, source)))
    }
}

/// Caller holding the moderation bearer token.
#[derive(Debug, Clone)]
pub struct AdminAuthenticated(pub AdminActor);

impl<S> FromRequestParts<S> for AdminAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing Authorization header".into(),
                ))
            })?;

        let actor = app_state
            .services
            .authenticate_admin(header.token())
            .map_err(HttpError::from_error)?;

        Ok(Self(actor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn forwarded_for_takes_first_hop() {
        let parts = parts_with(&[
            ("x-forwarded-for", " 203.0.113.7, 10.0.0.1"),
            ("x-real-ip", "10.0.0.2"),
        ]);
        assert_eq!(
            client_key_from_parts(&parts, ClientIpSource::FirstForwarded),
            "203.0.113.7"
        );
    }

    #[test]
    fn last_forwarded_takes_the_hop_added_by_the_proxy() {
        let parts = parts_with(&[("x-forwarded-for", "1.1.1.1, 2.2.2.2, 198.51.100.9")]);
        assert_eq!(
            client_key_from_parts(&parts, ClientIpSource::LastForwarded),
            "198.51.100.9"
        );
    }

    #[test]
    fn real_ip_is_second_choice() {
        let parts = parts_with(&[("x-real-ip", "198.51.100.4")]);
        assert_eq!(
            client_key_from_parts(&parts, ClientIpSource::FirstForwarded),
            "198.51.100.4"
        );
    }

    #[test]
    fn peer_address_then_unknown() {
        let mut parts = parts_with(&[]);
        assert_eq!(
            client_key_from_parts(&parts, ClientIpSource::FirstForwarded),
            "unknown"
        );

        let addr: SocketAddr = "192.0.2.1:5555".parse().unwrap();
        parts.extensions.insert(ConnectInfo(addr));
        assert_eq!(
            client_key_from_parts(&parts, ClientIpSource::FirstForwarded),
            "192.0.2.1"
        );
    }

    #[test]
    fn peer_source_ignores_forwarding_headers() {
        let mut parts = parts_with(&[
            ("x-forwarded-for", "203.0.113.7"),
            ("x-real-ip", "203.0.113.8"),
        ]);
        parts
            .extensions
            .insert(ConnectInfo("192.0.2.1:5555".parse::<SocketAddr>().unwrap()));
        assert_eq!(client_key_from_parts(&parts, ClientIpSource::Peer), "192.0.2.1");
    }

    #[test]
    fn ip_source_names() {
        assert_eq!(ClientIpSource::parse("Peer"), Some(ClientIpSource::Peer));
        assert_eq!(
            ClientIpSource::parse("last-forwarded"),
            Some(ClientIpSource::LastForwarded)
        );
        assert_eq!(ClientIpSource::parse("random"), None);
    }
}
