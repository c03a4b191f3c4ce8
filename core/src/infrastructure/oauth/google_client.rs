use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    authentication::{ports::OAuthClient, value_objects::OAuthUserProfile},
    common::{GoogleOAuthConfig, entities::app_errors::CoreError},
};

const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

#[derive(Debug, Clone)]
pub struct GoogleOAuthClient {
    config: GoogleOAuthConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    sub: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
    #[serde(default)]
    email_verified: bool,
}

impl GoogleOAuthClient {
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

impl OAuthClient for GoogleOAuthClient {
    fn authorize_url(&self, state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&state={}",
            AUTHORIZE_URL,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode("openid email profile"),
            urlencoding::encode(state),
        )
    }

    async fn exchange_code(&self, code: &str) -> Result<OAuthUserProfile, CoreError> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .client
            .post(TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Google token request failed: {}", e);
                CoreError::ExternalServiceError(format!("OAuth token error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Google token error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "OAuth token exchange failed: {}",
                status
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Google token response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse token response: {}", e))
        })?;

        let response = self
            .client
            .get(USERINFO_URL)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Google userinfo request failed: {}", e);
                CoreError::ExternalServiceError(format!("OAuth userinfo error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Google userinfo error: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "OAuth userinfo fetch failed: {}",
                status
            )));
        }

        let info: UserInfoResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Google userinfo response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse userinfo response: {}", e))
        })?;

        Ok(OAuthUserProfile {
            provider_id: info.sub,
            name: info.name.unwrap_or_else(|| info.email.clone()),
            email: info.email,
            avatar: info.picture,
            email_verified: info.email_verified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_url_encodes_redirect_and_state() {
        let client = GoogleOAuthClient::new(GoogleOAuthConfig {
            client_id: "client-id".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "http://localhost:3001/api/auth/google/callback".to_string(),
        });

        let url = client.authorize_url("abc 123");

        assert!(url.starts_with(AUTHORIZE_URL));
        assert!(url.contains("client_id=client-id"));
        assert!(url.contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A3001%2Fapi%2Fauth%2Fgoogle%2Fcallback"
        ));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains("state=abc%20123"));
    }
}
