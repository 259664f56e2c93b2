use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{ErrorDetail, QuoteRequest, QuoteResponse},
};

#[utoipa::path(
    post,
    path = "/api/quote",
    request_body = QuoteRequest,
    responses(
        (status = 200, body = QuoteResponse),
        (status = 404, description = "Device not found", body = ErrorDetail)
    )
)]
pub(crate) async fn get_quote(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<QuoteRequest>,
) -> ApiResult<Json<QuoteResponse>> {
    let quote = state.quote_service.get_quote(payload.into()).await?;
    Ok(Json(QuoteResponse::from(quote)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quote", post(get_quote))
}
