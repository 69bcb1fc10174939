use async_trait::async_trait;
use chrono::Utc;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository,
};
use crate::auth::domain::{AuthSession, AuthUserInfo};

// ========================= Login Request =========================

/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }
        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ========================= Login Error =========================

#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ========================= Use Case =========================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<AuthSession, LoginError>;
}

pub struct LoginUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> LoginUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> ILoginUserUseCase for LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<AuthSession, LoginError> {
        // Unknown email and wrong password are indistinguishable outcomes.
        let user = self
            .user_query
            .find_by_email(request.email())
            .await
            .map_err(LoginError::QueryError)?
            .ok_or(LoginError::InvalidCredentials)?;

        let valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .map_err(|_| LoginError::InvalidCredentials)?;
        if !valid {
            return Err(LoginError::InvalidCredentials);
        }

        if let Err(e) = self
            .user_repository
            .set_last_login(&user.id, Utc::now())
            .await
        {
            // Not worth failing the login over.
            warn!(user_id = %user.id, error = %e, "failed to record last login");
        }

        let token = self
            .token_provider
            .issue_token(&user.id)
            .map_err(|e| LoginError::TokenGenerationFailed(format!("{:?}", e)))?;

        Ok(AuthSession {
            token,
            user: AuthUserInfo::from(&user),
        })
    }
}
