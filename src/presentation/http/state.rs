use crate::application::services::ApplicationServices;
use crate::presentation::http::extractors::ClientIpSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub client_ip_source: ClientIpSource,
}
