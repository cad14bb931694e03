//! Builders for the HTTP state shared across workers.

use actix_web::web;

use crate::domain::UserDirectory;
use crate::inbound::http::state::HttpState;

use super::ServerConfig;

/// Wire the user directory over the configured repository.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::from(UserDirectory::new(config.repository())))
}
