//! Default service for requests that match no route.

use actix_web::HttpResponse;

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Body message for unmatched routes.
pub const ROUTE_NOT_FOUND: &str = "Not found";

/// Answer every unmatched request with `404 {"error": "Not found"}`.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found(ROUTE_NOT_FOUND))
}
