pub mod comment_service;
pub mod playlist_service;
pub mod video_service;
