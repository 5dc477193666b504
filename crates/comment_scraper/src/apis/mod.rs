use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod api_models;
pub mod comment_handlers;
pub mod video_handlers;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "comments", description = "Comment export API"),
        (name = "videos", description = "Video details API")
    )
)]
pub struct ApiDoc;

pub fn setup_routes() -> Router<Arc<AppState>> {
    let comment_router = OpenApiRouter::new()
        .routes(routes!(comment_handlers::scrape_playlist_comments))
        .routes(routes!(comment_handlers::scrape_video_comments));

    let video_router = OpenApiRouter::new().routes(routes!(video_handlers::get_video_details));

    let router = OpenApiRouter::new()
        .nest("/comments", comment_router)
        .nest("/videos", video_router);

    let (api_router, api_openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", router)
        .split_for_parts();

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
}
