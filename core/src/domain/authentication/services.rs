use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::{
    authentication::entities::JwtClaim, common::entities::app_errors::CoreError,
    user::entities::User,
};

pub fn hash_password(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            CoreError::InternalServerError
        })
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, CoreError> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| {
        tracing::error!("Stored password hash is malformed: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Issue a signed bearer token for the user. Returns the token and its expiry,
/// which doubles as the session expiry.
pub fn generate_token(
    user: &User,
    secret: &str,
    ttl_days: i64,
) -> Result<(String, DateTime<Utc>), CoreError> {
    let expires_at = Utc::now() + Duration::days(ttl_days);
    let claim = JwtClaim {
        sub: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign token: {}", e);
        CoreError::InternalServerError
    })?;

    Ok((token, expires_at))
}

pub fn verify_token(token: &str, secret: &str) -> Result<JwtClaim, CoreError> {
    decode::<JwtClaim>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| CoreError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::value_objects::CreateUserRequest;

    fn test_user() -> User {
        User::new(CreateUserRequest {
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            avatar: None,
            provider: "email".to_string(),
            provider_id: None,
            email_verified: false,
            password_hash: None,
        })
    }

    #[test]
    fn password_hash_roundtrip() {
        let hash = hash_password("hunter2secret").unwrap();
        assert!(verify_password("hunter2secret", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn token_roundtrip_carries_user_claims() {
        let user = test_user();
        let (token, expires_at) = generate_token(&user, "test-secret", 7).unwrap();

        let claim = verify_token(&token, "test-secret").unwrap();
        assert_eq!(claim.sub, user.id);
        assert_eq!(claim.email, user.email);
        assert_eq!(claim.name, user.name);
        assert_eq!(claim.exp, expires_at.timestamp());
    }

    #[test]
    fn token_with_wrong_secret_is_rejected() {
        let user = test_user();
        let (token, _) = generate_token(&user, "test-secret", 7).unwrap();

        assert_eq!(
            verify_token(&token, "other-secret"),
            Err(CoreError::InvalidToken)
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let user = test_user();
        let expired = JwtClaim {
            sub: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &expired,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(
            verify_token(&token, "test-secret"),
            Err(CoreError::InvalidToken)
        );
    }
}
