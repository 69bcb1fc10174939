#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub enum TokenError {
    IssueFailed(String),
    Invalid,
    Expired,
}

pub trait TokenProvider: Send + Sync {
    fn issue_token(&self, user_id: &str) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
