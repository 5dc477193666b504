pub mod comments;
pub mod videos;
