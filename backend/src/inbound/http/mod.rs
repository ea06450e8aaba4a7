//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod courses;
pub mod error;
pub mod fallback;
pub mod health;
pub mod instructors;
pub mod schemas;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register every resource route, the extractor error handlers, and the
/// not-found fallback.
///
/// # Examples
/// ```
/// use actix_web::App;
///
/// let app = App::new().configure(learnxcel::inbound::http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(validation::path_error_handler))
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(instructors::list_instructors)
        .service(instructors::create_instructor)
        .service(instructors::get_instructor)
        .service(courses::list_courses)
        .service(courses::create_course)
        .service(courses::get_course)
        .default_service(web::to(fallback::not_found));
}
