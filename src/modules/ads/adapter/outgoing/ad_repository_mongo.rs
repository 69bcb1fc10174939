use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, to_bson, DateTime as BsonDateTime, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use super::documents::AdDocument;
use crate::ads::application::ports::outgoing::{
    AdRepository, AdRepositoryError, CreateAdData, UpdateAdData,
};
use crate::ads::domain::Ad;
use crate::profile::adapter::outgoing::documents::PhotoDocument;

#[derive(Clone)]
pub struct AdRepositoryMongo {
    collection: Collection<AdDocument>,
}

impl AdRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("ads"),
        }
    }

    fn parse_id(id: &str, what: &str) -> Result<ObjectId, AdRepositoryError> {
        ObjectId::parse_str(id)
            .map_err(|e| AdRepositoryError::StoreError(format!("Invalid {} ID: {}", what, e)))
    }

    fn set_fields(data: &UpdateAdData) -> Result<Document, AdRepositoryError> {
        let mut set = Document::new();

        macro_rules! set_opt {
            ($field:ident) => {
                if let Some(value) = &data.$field {
                    set.insert(stringify!($field), value.clone());
                }
            };
        }

        set_opt!(title);
        set_opt!(bio);
        set_opt!(name);
        set_opt!(age);
        set_opt!(gender);
        set_opt!(country);
        set_opt!(city);
        set_opt!(phone_number);
        set_opt!(relationship_type);
        set_opt!(interests);
        set_opt!(has_children);
        set_opt!(wants_children);
        set_opt!(education);
        set_opt!(height);
        set_opt!(smoking);
        set_opt!(drinking);
        set_opt!(religion);
        set_opt!(languages);
        set_opt!(body_type);
        set_opt!(relationship_status);

        if let Some(photos) = &data.photos {
            let documents: Vec<PhotoDocument> =
                photos.iter().map(PhotoDocument::from_domain).collect();
            let value =
                to_bson(&documents).map_err(|e| AdRepositoryError::StoreError(e.to_string()))?;
            set.insert("photos", value);
        }

        set.insert("updated_at", BsonDateTime::now());
        Ok(set)
    }
}

#[async_trait]
impl AdRepository for AdRepositoryMongo {
    async fn insert(&self, user_id: &str, data: CreateAdData) -> Result<Ad, AdRepositoryError> {
        let owner = Self::parse_id(user_id, "user")?;
        let mut document = AdDocument::from_create_data(owner, data);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| AdRepositoryError::StoreError(e.to_string()))?;

        document.id = result.inserted_id.as_object_id();
        Ok(document.to_domain())
    }

    async fn update(
        &self,
        ad_id: &str,
        owner_id: &str,
        data: UpdateAdData,
    ) -> Result<Ad, AdRepositoryError> {
        let ad_oid = Self::parse_id(ad_id, "ad")?;
        let owner = Self::parse_id(owner_id, "user")?;

        let set = Self::set_fields(&data)?;

        let document = self
            .collection
            .find_one_and_update(doc! { "_id": ad_oid, "user_id": owner }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AdRepositoryError::StoreError(e.to_string()))?
            .ok_or(AdRepositoryError::NotFound)?;

        Ok(document.to_domain())
    }

    async fn deactivate(&self, ad_id: &str, owner_id: &str) -> Result<(), AdRepositoryError> {
        let ad_oid = Self::parse_id(ad_id, "ad")?;
        let owner = Self::parse_id(owner_id, "user")?;

        let result = self
            .collection
            .update_one(
                doc! { "_id": ad_oid, "user_id": owner },
                doc! { "$set": { "active": false, "updated_at": BsonDateTime::now() } },
            )
            .await
            .map_err(|e| AdRepositoryError::StoreError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AdRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn increment_views(&self, ad_id: &str) -> Result<Option<Ad>, AdRepositoryError> {
        let ad_oid = Self::parse_id(ad_id, "ad")?;

        let document = self
            .collection
            .find_one_and_update(
                doc! { "_id": ad_oid, "active": true },
                doc! { "$inc": { "views": 1 } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AdRepositoryError::StoreError(e.to_string()))?;

        Ok(document.map(AdDocument::to_domain))
    }
}
