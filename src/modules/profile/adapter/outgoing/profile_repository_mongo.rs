use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, to_bson, DateTime as BsonDateTime, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use super::documents::{PhotoDocument, ProfileDocument};
use crate::profile::application::ports::outgoing::{
    ProfileDraft, ProfileRepository, ProfileRepositoryError,
};
use crate::profile::domain::{Photo, Profile};

#[derive(Clone)]
pub struct ProfileRepositoryMongo {
    collection: Collection<ProfileDocument>,
}

impl ProfileRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("profiles"),
        }
    }

    fn parse_id(user_id: &str) -> Result<ObjectId, ProfileRepositoryError> {
        ObjectId::parse_str(user_id)
            .map_err(|e| ProfileRepositoryError::StoreError(format!("Invalid user ID: {}", e)))
    }

    /// Builds the `$set` document out of the fields the draft actually
    /// carries; absent fields never touch the stored document.
    fn set_fields(draft: &ProfileDraft) -> Document {
        let mut set = Document::new();

        macro_rules! set_opt {
            ($field:ident) => {
                if let Some(value) = &draft.$field {
                    set.insert(stringify!($field), value.clone());
                }
            };
        }

        set_opt!(name);
        set_opt!(age);
        set_opt!(gender);
        set_opt!(country);
        set_opt!(city);
        set_opt!(occupation);
        set_opt!(phone_number);
        set_opt!(height);
        set_opt!(education);
        set_opt!(smoking_habit);
        set_opt!(drinking_habit);
        set_opt!(fitness_level);
        set_opt!(diet);
        set_opt!(pet_preference);
        set_opt!(introvert_extrovert);
        set_opt!(spontaneous_planned);
        set_opt!(creative_analytical);
        set_opt!(relationship_type);
        set_opt!(wants_children);
        set_opt!(religion_importance);
        set_opt!(political_alignment);
        set_opt!(interests);
        set_opt!(partner_age_min);
        set_opt!(partner_age_max);
        set_opt!(partner_gender);
        set_opt!(deal_breakers);
        set_opt!(bio);

        set
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryMongo {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Profile>, ProfileRepositoryError> {
        let oid = Self::parse_id(user_id)?;

        let document = self
            .collection
            .find_one(doc! { "user_id": oid })
            .await
            .map_err(|e| ProfileRepositoryError::StoreError(e.to_string()))?;

        Ok(document.map(ProfileDocument::to_domain))
    }

    async fn upsert(
        &self,
        user_id: &str,
        draft: ProfileDraft,
    ) -> Result<Profile, ProfileRepositoryError> {
        let oid = Self::parse_id(user_id)?;

        let mut set = Self::set_fields(&draft);
        set.insert("last_updated", BsonDateTime::now());

        let update = doc! {
            "$set": set,
            "$setOnInsert": {
                "user_id": oid,
                "photos": [],
                "profile_complete": false,
            },
        };

        let document = self
            .collection
            .find_one_and_update(doc! { "user_id": oid }, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| ProfileRepositoryError::StoreError(e.to_string()))?
            .ok_or_else(|| {
                ProfileRepositoryError::StoreError("upsert returned no document".to_string())
            })?;

        Ok(document.to_domain())
    }

    async fn set_profile_complete(
        &self,
        user_id: &str,
        complete: bool,
    ) -> Result<(), ProfileRepositoryError> {
        let oid = Self::parse_id(user_id)?;

        self.collection
            .update_one(
                doc! { "user_id": oid },
                doc! { "$set": { "profile_complete": complete } },
            )
            .await
            .map_err(|e| ProfileRepositoryError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_user(&self, user_id: &str) -> Result<bool, ProfileRepositoryError> {
        let oid = Self::parse_id(user_id)?;

        let result = self
            .collection
            .delete_one(doc! { "user_id": oid })
            .await
            .map_err(|e| ProfileRepositoryError::StoreError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn push_photo(&self, user_id: &str, photo: Photo) -> Result<(), ProfileRepositoryError> {
        let oid = Self::parse_id(user_id)?;

        let photo_document = to_bson(&PhotoDocument::from_domain(&photo))
            .map_err(|e| ProfileRepositoryError::StoreError(e.to_string()))?;

        let result = self
            .collection
            .update_one(
                doc! { "user_id": oid },
                doc! { "$push": { "photos": photo_document } },
            )
            .await
            .map_err(|e| ProfileRepositoryError::StoreError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn pull_photo(
        &self,
        user_id: &str,
        storage_id: &str,
    ) -> Result<(), ProfileRepositoryError> {
        let oid = Self::parse_id(user_id)?;

        let result = self
            .collection
            .update_one(
                doc! { "user_id": oid },
                doc! { "$pull": { "photos": { "storage_id": storage_id } } },
            )
            .await
            .map_err(|e| ProfileRepositoryError::StoreError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }
}
