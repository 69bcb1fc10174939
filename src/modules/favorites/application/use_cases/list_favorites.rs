use async_trait::async_trait;
use std::collections::HashMap;

use crate::ads::application::ports::outgoing::AdQuery;
use crate::ads::domain::Ad;
use crate::favorites::application::ports::outgoing::FavoriteRepository;

#[derive(Debug, Clone)]
pub enum ListFavoritesError {
    RepositoryError(String),
}

#[async_trait]
pub trait IListFavoritesUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<Vec<Ad>, ListFavoritesError>;
}

/// Resolves the user's favorites to their target listings, in
/// favorite-recency order. Targets that were deactivated or removed after
/// being saved are silently dropped, never errored.
pub struct ListFavoritesUseCase<R, A>
where
    R: FavoriteRepository,
    A: AdQuery,
{
    favorite_repository: R,
    ad_query: A,
}

impl<R, A> ListFavoritesUseCase<R, A>
where
    R: FavoriteRepository,
    A: AdQuery,
{
    pub fn new(favorite_repository: R, ad_query: A) -> Self {
        Self {
            favorite_repository,
            ad_query,
        }
    }
}

#[async_trait]
impl<R, A> IListFavoritesUseCase for ListFavoritesUseCase<R, A>
where
    R: FavoriteRepository + Send + Sync,
    A: AdQuery + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<Vec<Ad>, ListFavoritesError> {
        let favorites = self
            .favorite_repository
            .find_by_user(user_id)
            .await
            .map_err(|e| ListFavoritesError::RepositoryError(e.to_string()))?;

        let ad_ids: Vec<String> = favorites.iter().map(|f| f.ad_id.clone()).collect();
        let mut ads_by_id: HashMap<String, Ad> = self
            .ad_query
            .find_by_ids(&ad_ids)
            .await
            .map_err(|e| ListFavoritesError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|ad| (ad.id.clone(), ad))
            .collect();

        Ok(favorites
            .iter()
            .filter_map(|favorite| ads_by_id.remove(&favorite.ad_id))
            .filter(|ad| ad.active)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ads::application::ports::outgoing::AdQueryError;
    use crate::favorites::application::ports::outgoing::FavoriteRepositoryError;
    use crate::favorites::domain::FavoriteAd;
    use crate::shared::search::AdSearchCriteria;
    use chrono::{TimeZone, Utc};

    const USER: &str = "64b0c0c0c0c0c0c0c0c0c002";
    const AD_A: &str = "64b0c0c0c0c0c0c0c0c0c0a1";
    const AD_B: &str = "64b0c0c0c0c0c0c0c0c0c0a2";
    const AD_GONE: &str = "64b0c0c0c0c0c0c0c0c0c0a3";

    fn favorite(ad_id: &str, minute: u32) -> FavoriteAd {
        FavoriteAd {
            id: format!("fav-{}", ad_id),
            user_id: USER.to_string(),
            ad_id: ad_id.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
        }
    }

    fn ad(id: &str, active: bool) -> Ad {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        Ad {
            id: id.to_string(),
            user_id: "64b0c0c0c0c0c0c0c0c0c001".to_string(),
            title: format!("Listing {}", id),
            bio: "bio".to_string(),
            name: "Jane".to_string(),
            age: 29,
            gender: "Female".to_string(),
            country: "Romania".to_string(),
            city: None,
            phone_number: "+40712345678".to_string(),
            relationship_type: "Casual".to_string(),
            interests: vec![],
            has_children: None,
            wants_children: None,
            education: None,
            height: None,
            smoking: None,
            drinking: None,
            religion: None,
            languages: vec![],
            body_type: None,
            relationship_status: None,
            photos: vec![],
            active,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    struct MockFavoriteRepository {
        pub favorites: Vec<FavoriteAd>,
    }

    #[async_trait]
    impl FavoriteRepository for MockFavoriteRepository {
        async fn insert(
            &self,
            _user_id: &str,
            _ad_id: &str,
        ) -> Result<(), FavoriteRepositoryError> {
            Ok(())
        }

        async fn delete(
            &self,
            _user_id: &str,
            _ad_id: &str,
        ) -> Result<bool, FavoriteRepositoryError> {
            Ok(false)
        }

        async fn find_by_user(
            &self,
            _user_id: &str,
        ) -> Result<Vec<FavoriteAd>, FavoriteRepositoryError> {
            Ok(self.favorites.clone())
        }

        async fn exists(
            &self,
            _user_id: &str,
            _ad_id: &str,
        ) -> Result<bool, FavoriteRepositoryError> {
            Ok(false)
        }
    }

    struct MockAdQuery {
        pub ads: Vec<Ad>,
    }

    #[async_trait]
    impl AdQuery for MockAdQuery {
        async fn find_active_by_id(&self, _ad_id: &str) -> Result<Option<Ad>, AdQueryError> {
            Ok(None)
        }

        async fn find_active_by_owner(&self, _owner_id: &str) -> Result<Vec<Ad>, AdQueryError> {
            Ok(vec![])
        }

        async fn find_by_ids(&self, _ad_ids: &[String]) -> Result<Vec<Ad>, AdQueryError> {
            Ok(self.ads.clone())
        }

        async fn search(&self, _criteria: &AdSearchCriteria) -> Result<Vec<Ad>, AdQueryError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_dangling_and_inactive_targets_are_dropped() {
        // AD_B was deactivated, AD_GONE no longer exists; only AD_A
        // survives, and no error is raised for the other two.
        let uc = ListFavoritesUseCase::new(
            MockFavoriteRepository {
                favorites: vec![favorite(AD_A, 2), favorite(AD_B, 1), favorite(AD_GONE, 0)],
            },
            MockAdQuery {
                ads: vec![ad(AD_A, true), ad(AD_B, false)],
            },
        );

        let ads = uc.execute(USER).await.unwrap();
        assert_eq!(ads.len(), 1);
        assert_eq!(ads[0].id, AD_A);
    }

    #[tokio::test]
    async fn test_results_follow_favorite_recency() {
        let uc = ListFavoritesUseCase::new(
            MockFavoriteRepository {
                // Newest favorite first, as the repository returns them.
                favorites: vec![favorite(AD_B, 5), favorite(AD_A, 0)],
            },
            MockAdQuery {
                ads: vec![ad(AD_A, true), ad(AD_B, true)],
            },
        );

        let ads = uc.execute(USER).await.unwrap();
        assert_eq!(ads[0].id, AD_B);
        assert_eq!(ads[1].id, AD_A);
    }
}
