use apis::setup_routes;
use axum::Router;
use external_services::youtube::{ApiKey, YoutubeApi, YoutubeService};
use services::{
    comment_service::CommentService, playlist_service::PlaylistService,
    video_service::VideoService,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod apis;
pub mod external_services;
pub mod models;
pub mod services;
pub mod settings;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub struct AppState {
    pub comment_service: CommentService,
    pub playlist_service: PlaylistService,
    pub video_service: VideoService,
    /// Used when a URL-keyed request does not send its own key
    pub default_api_key: Option<ApiKey>,
}

impl AppState {
    pub fn new(youtube: Arc<dyn YoutubeApi>, default_api_key: Option<ApiKey>) -> Self {
        AppState {
            comment_service: CommentService::new(youtube.clone()),
            playlist_service: PlaylistService::new(youtube.clone()),
            video_service: VideoService::new(youtube),
            default_api_key,
        }
    }
}

pub fn setup_router(settings: &settings::Settings) -> Router {
    let youtube = Arc::new(YoutubeService::new(settings.youtube_api_url()));
    let app_state = AppState::new(youtube, settings.youtube_api_key());

    setup_routes()
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(app_state))
}

pub fn init_tracing(settings: &settings::Settings) {
    let level = if settings.is_production() {
        tracing::Level::INFO
    } else {
        tracing::Level::DEBUG
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_ansi(!settings.is_production())
        .init();
}
