//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, DateTime as BsonDateTime};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use tracing::instrument;

use murmur_core::entities::User;
use murmur_core::traits::{NewUser, RepoResult, UserPatch, UserRepository};
use murmur_core::DocumentId;

use crate::mappers::{new_user_document, to_object_id, to_object_ids};
use crate::models::UserDocument;

use super::error::{map_store_error, map_write_error, validate_email};

/// MongoDB implementation of UserRepository
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository over the `users` collection
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(UserDocument::COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_store_error)?;

        let docs: Vec<UserDocument> = cursor.try_collect().await.map_err(map_store_error)?;

        Ok(docs.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<User>> {
        let oid = to_object_id(id)?;

        let result = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_store_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, ids))]
    async fn find_by_ids(&self, ids: &[DocumentId]) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let oids = to_object_ids(ids)?;

        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": oids } })
            .await
            .map_err(map_store_error)?;

        let docs: Vec<UserDocument> = cursor.try_collect().await.map_err(map_store_error)?;

        Ok(docs.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, data))]
    async fn create(&self, data: NewUser) -> RepoResult<User> {
        validate_email(&data.email)?;
        let document = new_user_document(data);

        self.collection
            .insert_one(&document)
            .await
            .map_err(map_write_error)?;

        Ok(User::from(document))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &DocumentId, patch: UserPatch) -> RepoResult<Option<User>> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }
        if let Some(email) = &patch.email {
            validate_email(email)?;
        }
        let oid = to_object_id(id)?;

        let mut set = doc! { "updated_at": BsonDateTime::now() };
        if let Some(username) = patch.username {
            set.insert("username", username);
        }
        if let Some(email) = patch.email {
            set.insert("email", email);
        }

        let result = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_write_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<Option<User>> {
        let oid = to_object_id(id)?;

        let result = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(map_store_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn add_friend(
        &self,
        user_id: &DocumentId,
        friend_id: &DocumentId,
    ) -> RepoResult<Option<User>> {
        let oid = to_object_id(user_id)?;
        let friend_oid = to_object_id(friend_id)?;

        let result = self
            .collection
            .find_one_and_update(
                doc! { "_id": oid },
                doc! {
                    "$addToSet": { "friends": friend_oid },
                    "$set": { "updated_at": BsonDateTime::now() },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_store_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn remove_friend(
        &self,
        user_id: &DocumentId,
        friend_id: &DocumentId,
    ) -> RepoResult<Option<User>> {
        let oid = to_object_id(user_id)?;
        let friend_oid = to_object_id(friend_id)?;

        let result = self
            .collection
            .find_one_and_update(
                doc! { "_id": oid },
                doc! {
                    "$pull": { "friends": friend_oid },
                    "$set": { "updated_at": BsonDateTime::now() },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_store_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn push_thought(
        &self,
        user_id: &DocumentId,
        thought_id: &DocumentId,
    ) -> RepoResult<Option<User>> {
        let oid = to_object_id(user_id)?;
        let thought_oid = to_object_id(thought_id)?;

        let result = self
            .collection
            .find_one_and_update(
                doc! { "_id": oid },
                doc! {
                    "$push": { "thoughts": thought_oid },
                    "$set": { "updated_at": BsonDateTime::now() },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_store_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn pull_thought(&self, thought_id: &DocumentId) -> RepoResult<Option<User>> {
        let thought_oid = to_object_id(thought_id)?;

        // The owner is located by scanning for the reference itself, not by
        // trusting a stored back-reference on the thought.
        let result = self
            .collection
            .find_one_and_update(
                doc! { "thoughts": thought_oid },
                doc! {
                    "$pull": { "thoughts": thought_oid },
                    "$set": { "updated_at": BsonDateTime::now() },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_store_error)?;

        Ok(result.map(User::from))
    }
}
