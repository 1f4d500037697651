pub mod client;
pub mod dto;

pub use client::{PlaylistItemsSource, YouTubeClient, PAGE_SIZE};
