pub mod config;
pub mod fetch;
pub mod http;
pub mod middleware;
pub mod oauth;
pub mod repositories;
pub mod youtube;
