use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};

pub const TEST_USER_ID: &str = "64b0c0c0c0c0c0c0c0c0c0c0";

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test-secret".to_string(),
        issuer: "test".to_string(),
        token_expiry: 3600,
    })
}
