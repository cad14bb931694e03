//! Service status endpoint.

use actix_web::web;

use crate::domain::ServiceStatus;
use crate::inbound::http::schemas::ServiceStatusSchema;
use crate::inbound::http::state::HttpState;

/// Report whether user storage is reachable.
///
/// Always answers 200; a storage outage shows up as `"database": false`.
#[utoipa::path(
    get,
    path = "/status",
    responses((status = 200, description = "Service status", body = ServiceStatusSchema)),
    tags = ["status"],
    operation_id = "getStatus"
)]
pub async fn get_status(state: web::Data<HttpState>) -> web::Json<ServiceStatus> {
    web::Json(state.query.status().await)
}
