use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    response::Html,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{handlers, middleware, openapi::ApiDoc};

pub fn build_router(state: Arc<crate::AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("invalid CORS_ORIGIN"),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true);

    // Auth routes
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth_handler::login))
        .route("/logout", post(handlers::auth_handler::logout))
        .route("/me", get(handlers::auth_handler::get_me));

    // User routes
    let user_routes = Router::new()
        .route("/", get(handlers::users_handler::get_users))
        .route("/", post(handlers::users_handler::create_user))
        .route("/{username}", delete(handlers::users_handler::delete_user));

    // Employee routes, including the per-day calendar operations
    let employee_routes = Router::new()
        .route("/", get(handlers::employees_handler::get_employees))
        .route("/", post(handlers::employees_handler::create_employee))
        .route("/{id}", put(handlers::employees_handler::update_employee))
        .route("/{id}", delete(handlers::employees_handler::delete_employee))
        .route(
            "/{id}/calendar/{date}",
            put(handlers::calendar_handler::set_day_status),
        )
        .route(
            "/{id}/calendar/{date}/approve",
            post(handlers::calendar_handler::approve_day),
        )
        .route(
            "/{id}/calendar/{date}/reject",
            post(handlers::calendar_handler::reject_day),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/employees", employee_routes)
        .route("/api/calendar", get(handlers::calendar_handler::get_calendar))
        .route("/api/export", get(handlers::export_handler::get_export))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/swagger-ui", get(swagger_ui))
        .layer(axum_middleware::from_fn(middleware::metrics_middleware))
        .layer(axum_middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn swagger_ui() -> Html<&'static str> {
    Html(r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Shiftcal API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: '/api-docs/openapi.json',
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
    "#)
}
