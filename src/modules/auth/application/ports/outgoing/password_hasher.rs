#[derive(Debug, Clone, PartialEq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
}

pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, HashError>;
    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError>;
}
