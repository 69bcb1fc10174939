use async_trait::async_trait;

use crate::ads::application::ports::outgoing::{AdRepository, CreateAdData};
use crate::ads::domain::Ad;

#[derive(Debug, Clone)]
pub enum CreateAdError {
    Validation(String),
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateAdUseCase: Send + Sync {
    async fn execute(&self, user_id: &str, data: CreateAdData) -> Result<Ad, CreateAdError>;
}

pub struct CreateAdUseCase<R>
where
    R: AdRepository,
{
    ad_repository: R,
}

impl<R> CreateAdUseCase<R>
where
    R: AdRepository,
{
    pub fn new(ad_repository: R) -> Self {
        Self { ad_repository }
    }
}

fn validate(data: &CreateAdData) -> Result<(), CreateAdError> {
    let required = [
        ("title", &data.title),
        ("bio", &data.bio),
        ("name", &data.name),
        ("gender", &data.gender),
        ("country", &data.country),
        ("phone_number", &data.phone_number),
        ("relationship_type", &data.relationship_type),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CreateAdError::Validation(format!(
                "Field '{}' is required",
                field
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl<R> ICreateAdUseCase for CreateAdUseCase<R>
where
    R: AdRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str, data: CreateAdData) -> Result<Ad, CreateAdError> {
        validate(&data)?;

        self.ad_repository
            .insert(user_id, data)
            .await
            .map_err(|e| CreateAdError::RepositoryError(e.to_string()))
    }
}
