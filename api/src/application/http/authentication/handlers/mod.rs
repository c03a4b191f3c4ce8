pub mod get_me;
pub mod google_callback;
pub mod google_redirect;
pub mod login;
pub mod logout;
pub mod signup;
pub mod update_preferences;
