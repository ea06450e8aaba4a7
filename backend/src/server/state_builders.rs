//! Builders for HTTP state backed by the Diesel repositories.

use std::sync::Arc;

use actix_web::web;

use learnxcel::inbound::http::state::HttpState;
use learnxcel::outbound::persistence::{
    DbPool, DieselCourseRepository, DieselInstructorRepository, DieselUserRepository,
};

/// Wire every domain service over repositories sharing `pool`.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    web::Data::new(HttpState::from_repositories(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselInstructorRepository::new(pool.clone())),
        Arc::new(DieselCourseRepository::new(pool.clone())),
    ))
}
