use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::domain::{AuthSession, AuthUserInfo};

const MIN_PASSWORD_LEN: usize = 6;

// ========================= Register Request =========================

/// Validated registration request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    PasswordTooShort,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::PasswordTooShort => {
                write!(f, "Password must be at least {} characters", MIN_PASSWORD_LEN)
            }
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterRequest {
    pub fn new(email: String, password: String) -> Result<Self, RegisterRequestError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(RegisterRequestError::PasswordTooShort);
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

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            email: String,
            password: String,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ========================= Register Error =========================

#[derive(Debug, Clone)]
pub enum RegisterError {
    EmailTaken,
    HashingFailed,
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::EmailTaken => write!(f, "Email already registered"),
            RegisterError::HashingFailed => write!(f, "Password hashing failed"),
            RegisterError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RegisterError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterError {}

// ========================= Use Case =========================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<AuthSession, RegisterError>;
}

pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
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
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: RegisterRequest) -> Result<AuthSession, RegisterError> {
        let existing = self
            .user_query
            .find_by_email(request.email())
            .await
            .map_err(RegisterError::RepositoryError)?;
        if existing.is_some() {
            return Err(RegisterError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .map_err(|_| RegisterError::HashingFailed)?;

        // The pre-check above is advisory; the unique email index decides
        // the race between two concurrent registrations.
        let user = self
            .user_repository
            .insert(request.email(), &password_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::DuplicateEmail => RegisterError::EmailTaken,
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .token_provider
            .issue_token(&user.id)
            .map_err(|e| RegisterError::TokenGenerationFailed(format!("{:?}", e)))?;

        Ok(AuthSession {
            token,
            user: AuthUserInfo::from(&user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{HashError, TokenClaims, TokenError};
    use crate::auth::domain::User;
    use async_trait::async_trait;
    use chrono::Utc;

    #[derive(Default)]
    struct MockUserQuery {
        pub email_taken: bool,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: &str) -> Result<Option<User>, String> {
            Ok(None)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
            if self.email_taken {
                Ok(Some(User {
                    id: "64b0c0c0c0c0c0c0c0c0c0c0".to_string(),
                    email: email.to_string(),
                    password_hash: "hash".to_string(),
                    last_login: None,
                    created_at: Utc::now(),
                }))
            } else {
                Ok(None)
            }
        }

        async fn find_by_ids(&self, _user_ids: &[String]) -> Result<Vec<User>, String> {
            Ok(vec![])
        }
    }

    #[derive(Default)]
    struct MockUserRepository {
        pub duplicate_on_insert: bool,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn insert(
            &self,
            email: &str,
            password_hash: &str,
        ) -> Result<User, UserRepositoryError> {
            if self.duplicate_on_insert {
                return Err(UserRepositoryError::DuplicateEmail);
            }
            Ok(User {
                id: "64b0c0c0c0c0c0c0c0c0c0c1".to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                last_login: None,
                created_at: Utc::now(),
            })
        }

        async fn set_last_login(
            &self,
            _user_id: &str,
            _at: chrono::DateTime<Utc>,
        ) -> Result<(), UserRepositoryError> {
            Ok(())
        }

        async fn delete(&self, _user_id: &str) -> Result<bool, UserRepositoryError> {
            Ok(true)
        }
    }

    struct MockHasher;

    impl PasswordHasher for MockHasher {
        fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{}", password))
        }

        fn verify_password(&self, _password: &str, _hashed: &str) -> Result<bool, HashError> {
            Ok(true)
        }
    }

    struct MockTokenProvider;

    impl TokenProvider for MockTokenProvider {
        fn issue_token(&self, user_id: &str) -> Result<String, TokenError> {
            Ok(format!("token-for-{}", user_id))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            Err(TokenError::Invalid)
        }
    }

    fn use_case(
        query: MockUserQuery,
        repo: MockUserRepository,
    ) -> RegisterUserUseCase<MockUserQuery, MockUserRepository> {
        RegisterUserUseCase::new(query, repo, Arc::new(MockHasher), Arc::new(MockTokenProvider))
    }

    #[test]
    fn test_request_rejects_short_password() {
        let result = RegisterRequest::new("jane@example.com".to_string(), "12345".to_string());
        assert_eq!(result.unwrap_err(), RegisterRequestError::PasswordTooShort);
    }

    #[test]
    fn test_request_lowercases_email() {
        let request =
            RegisterRequest::new("Jane@Example.COM".to_string(), "secret1".to_string()).unwrap();
        assert_eq!(request.email(), "jane@example.com");
    }

    #[test]
    fn test_request_rejects_invalid_email() {
        let result = RegisterRequest::new("not-an-email".to_string(), "secret1".to_string());
        assert_eq!(result.unwrap_err(), RegisterRequestError::InvalidEmailFormat);
    }

    #[tokio::test]
    async fn test_register_success() {
        let uc = use_case(MockUserQuery::default(), MockUserRepository::default());
        let request =
            RegisterRequest::new("jane@example.com".to_string(), "secret1".to_string()).unwrap();

        let session = uc.execute(request).await.unwrap();
        assert_eq!(session.user.email, "jane@example.com");
        assert!(session.token.starts_with("token-for-"));
    }

    #[tokio::test]
    async fn test_register_email_taken() {
        let uc = use_case(
            MockUserQuery { email_taken: true },
            MockUserRepository::default(),
        );
        let request =
            RegisterRequest::new("jane@example.com".to_string(), "secret1".to_string()).unwrap();

        match uc.execute(request).await {
            Err(RegisterError::EmailTaken) => {}
            other => panic!("Expected EmailTaken, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_duplicate_key_race_maps_to_email_taken() {
        // The pre-check passes but the store's unique index fires.
        let uc = use_case(
            MockUserQuery::default(),
            MockUserRepository {
                duplicate_on_insert: true,
            },
        );
        let request =
            RegisterRequest::new("jane@example.com".to_string(), "secret1".to_string()).unwrap();

        match uc.execute(request).await {
            Err(RegisterError::EmailTaken) => {}
            other => panic!("Expected EmailTaken, got {:?}", other),
        }
    }
}
