pub mod google;

pub use google::{GoogleAccessToken, GoogleOAuthClient};
