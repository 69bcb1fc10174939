use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::jwt_config::JwtConfig;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

/// Structure for JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // User id (hex)
    pub exp: i64,    // Expiration timestamp
    pub iss: String,
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_token(&self, user_id: &str) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(self.config.token_expiry);
        let claims = JwtClaims {
            sub: user_id.to_string(),
            exp: expiration.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // enforced manually below

        let decoded = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        if decoded.claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(TokenClaims {
            user_id: decoded.claims.sub,
        })
    }
}
