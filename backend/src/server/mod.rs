//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use habits_backend::Trace;
#[cfg(debug_assertions)]
use habits_backend::doc::ApiDoc;
use habits_backend::domain::HabitService;
use habits_backend::inbound::http::habits::{
    create_habit, delete_habit, get_habit, json_config, list_habits, update_habit,
};
use habits_backend::inbound::http::health::{HealthState, health, live, ready};
use habits_backend::inbound::http::state::HttpState;
use habits_backend::outbound::persistence::{DbPool, DieselHabitRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(pool: DbPool) -> web::Data<HttpState> {
    let service = Arc::new(HabitService::new(Arc::new(DieselHabitRepository::new(
        pool,
    ))));
    web::Data::new(HttpState::new(service.clone(), service))
}

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

    let api = web::scope("/v1")
        .service(list_habits)
        .service(get_habit)
        .service(create_habit)
        .service(update_habit)
        .service(delete_habit);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(api)
        .service(health)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails or, with the
/// `metrics` feature, when the Prometheus collectors cannot be registered.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        timeouts,
        db_pool,
    } = config;
    let http_state = build_http_state(db_pool);

    #[cfg(feature = "metrics")]
    let prometheus = metrics::make_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .client_request_timeout(timeouts.read)
    .client_disconnect_timeout(timeouts.write)
    .keep_alive(timeouts.idle)
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
