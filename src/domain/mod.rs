pub mod feed;
pub mod summary;
pub mod video;
