pub mod google_client;

pub use google_client::GoogleOAuthClient;
