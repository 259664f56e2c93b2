use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        Device, DiagnosticsResponse, ErrorDetail, MessageResponse, QuoteRequest, QuoteResponse,
    },
};

mod devices;
mod diagnostics;
mod quotes;
mod root;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::read_root,
        devices::list_devices,
        quotes::get_quote,
        diagnostics::test_database
    ),
    components(schemas(
        Device,
        QuoteRequest,
        QuoteResponse,
        MessageResponse,
        ErrorDetail,
        DiagnosticsResponse
    )),
    tags((name = "fonebuyers"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(devices::router())
        .merge(quotes::router())
        .route("/openapi.json", get(|| async { Json(openapi) }));

    Router::new()
        .merge(root::router())
        .merge(diagnostics::router())
        .nest("/api", api)
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
