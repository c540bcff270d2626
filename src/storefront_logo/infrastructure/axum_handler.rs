use crate::application::error::ApplicationError;
use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Json, Query, State},
    http::{header::HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::logo_endpoint::LogoEndpoint;
use crate::domain::font::FontInfo;
use crate::domain::logo::Logo;
use crate::domain::logo_request::{LogoRequest, LogoResponse};
use crate::domain::logo_service_trait::LogoService;
use crate::domain::preview::{LogoPreview, PreviewParams};
use crate::infrastructure::config::CorsConfig;
use crate::infrastructure::error::InfrastructureError;

#[derive(Clone)]
pub struct AppState {
    pub logo_endpoint: Arc<LogoEndpoint>,
}

impl AppState {
    pub fn new(logo_service: Arc<dyn LogoService>) -> Self {
        Self {
            logo_endpoint: Arc::new(LogoEndpoint::new(logo_service)),
        }
    }
}

pub fn router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    let logo_routes = Router::new()
        .route("/current", get(get_current_logo_handler))
        .route("/update", post(update_logo_handler))
        .route("/fonts", get(get_available_fonts_handler))
        .route("/history", get(get_logo_history_handler))
        .route("/preview", get(preview_logo_handler));

    Router::new()
        .nest("/logo", logo_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub fn build_cors_layer(config: &CorsConfig) -> Result<CorsLayer, InfrastructureError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(vec![HeaderName::from_static("content-type")]);

    if config.allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| InfrastructureError::InvalidCorsOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

pub async fn get_current_logo_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Logo>, ApplicationError> {
    let logo = state.logo_endpoint.current_logo().await?;
    Ok(Json(logo))
}

pub async fn update_logo_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LogoRequest>, JsonRejection>,
) -> Result<Json<LogoResponse>, ApplicationError> {
    let Json(request) = payload.map_err(|e| ApplicationError::InvalidPayload(e.body_text()))?;
    let response = state.logo_endpoint.update_logo(request).await?;
    Ok(Json(response))
}

pub async fn get_available_fonts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FontInfo>>, ApplicationError> {
    Ok(Json(state.logo_endpoint.available_fonts().await?))
}

pub async fn get_logo_history_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Logo>>, ApplicationError> {
    Ok(Json(state.logo_endpoint.logo_history().await?))
}

pub async fn preview_logo_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PreviewParams>, QueryRejection>,
) -> Result<Json<LogoPreview>, ApplicationError> {
    let Query(params) = params.map_err(|e| ApplicationError::InvalidPayload(e.body_text()))?;
    Ok(Json(state.logo_endpoint.preview_logo(params)))
}
