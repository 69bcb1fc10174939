use std::env;

// Tokens live for 30 days; there is no refresh or revocation flow.
const DEFAULT_EXPIRY_SECS: i64 = 30 * 24 * 3600;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let token_expiry = env::var("JWT_EXPIRY_SECS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_SECS.to_string())
            .parse::<i64>()
            .expect("Invalid JWT_EXPIRY_SECS value");

        Self {
            secret_key,
            issuer: String::from("Amora"),
            token_expiry,
        }
    }
}
