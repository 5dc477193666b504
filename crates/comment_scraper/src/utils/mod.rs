pub mod csv_export;
pub mod errors;
pub mod serde_utils;
pub mod video_url;
