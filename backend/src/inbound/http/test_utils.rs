//! Test helpers for inbound HTTP components.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// Build an application serving every resource route over `state`.
///
/// Mirrors the production app minus health probes and Swagger UI: the
/// [`Trace`] middleware, extractor error handlers, and not-found fallback
/// are all in place.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}
