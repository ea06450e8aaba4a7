//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use learnxcel::Trace;
#[cfg(debug_assertions)]
use learnxcel::doc::ApiDoc;
use learnxcel::inbound::http::configure;
use learnxcel::inbound::http::health::{HealthState, live, ready};
use learnxcel::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    // Probes and docs are registered before `configure` so the fallback
    // installed there only catches what nothing else claims.
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.configure(configure)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] carrying the bind address and pool.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config.db_pool);
    let ServerConfig { bind_addr, .. } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Fail the liveness check and stop accepting connections, letting in-flight
/// requests finish.
pub async fn drain(health_state: web::Data<HealthState>, handle: ServerHandle) {
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use learnxcel::test_support::TestDatabase;
    use rstest::rstest;
    use serde_json::Value;

    fn dependencies(database: &TestDatabase) -> AppDependencies {
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        AppDependencies {
            health_state,
            http_state: build_http_state(database.pool()),
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn probes_are_served_alongside_resources() {
        let database = TestDatabase::new().await.expect("test database");
        let app = actix_test::init_service(build_app(dependencies(&database))).await;

        let ready_request = actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request();
        let response = actix_test::call_service(&app, ready_request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let users_request = actix_test::TestRequest::get().uri("/users").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, users_request).await;
        assert_eq!(body, Value::Array(Vec::new()));
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_paths_fall_through_to_not_found() {
        let database = TestDatabase::new().await.expect("test database");
        let app = actix_test::init_service(build_app(dependencies(&database))).await;

        let request = actix_test::TestRequest::get().uri("/nothing-here").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "Not found"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn drain_fails_liveness_and_stops_the_server() {
        let database = TestDatabase::new().await.expect("test database");
        let health_state = web::Data::new(HealthState::new());
        let config = ServerConfig::new(
            "127.0.0.1:0".parse().expect("loopback address"),
            database.pool().clone(),
        );
        let server = create_server(health_state.clone(), config).expect("server binds");
        assert!(health_state.is_ready());
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);

        drain(health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }
}
