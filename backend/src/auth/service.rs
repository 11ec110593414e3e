//! Core logic for the authentication system.
//!
//! This service handles password hashing and verification (bcrypt) and token
//! issuance and decoding (HS256 JWT). Handlers stay thin by delegating here.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};

use super::errors::AuthError;
use super::models::Claims;

/// bcrypt work factor. Each hash embeds its own random salt.
pub const BCRYPT_COST: u32 = 10;

const TOKEN_TTL_SECS: i64 = 3600;

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(AuthError::internal)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash).map_err(AuthError::internal)
}

/// Signs a token binding the user id, expiring one hour from now.
pub fn issue_token(user_id: &str, secret: &str) -> Result<String, AuthError> {
    let claims = Claims {
        id: user_id.to_owned(),
        exp: (Utc::now() + Duration::seconds(TOKEN_TTL_SECS)).timestamp() as usize,
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AuthError::internal)
}

/// Verifies a token's signature and expiry and returns its claims. No route
/// calls this today; it exists so enforcement is a one-line change.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(AuthError::internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_hash_is_never_the_plaintext() {
        let hash = hash_password("p").unwrap();
        assert_ne!(hash, "p");
    }

    #[test]
    fn same_password_hashes_differently_each_time() {
        let first = hash_password("p").unwrap();
        let second = hash_password("p").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("p", &first).unwrap());
        assert!(verify_password("p", &second).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("p").unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn token_decodes_to_user_id_with_hour_expiry() {
        let token = issue_token("user-123", "secret").unwrap();
        let claims = decode_token(&token, "secret").unwrap();
        assert_eq!(claims.id, "user-123");

        let ttl = claims.exp as i64 - Utc::now().timestamp();
        assert!((3590..=3610).contains(&ttl), "unexpected ttl {ttl}");
    }

    #[test]
    fn token_fails_with_wrong_secret() {
        let token = issue_token("user-123", "secret").unwrap();
        assert!(decode_token(&token, "other-secret").is_err());
    }
}
