//! MongoDB implementation of ThoughtRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, DateTime as BsonDateTime};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use tracing::instrument;
use uuid::Uuid;

use murmur_core::entities::{Reaction, Thought};
use murmur_core::traits::{NewThought, RepoResult, ThoughtPatch, ThoughtRepository};
use murmur_core::DocumentId;

use crate::mappers::{new_thought_document, to_object_id, to_object_ids};
use crate::models::ThoughtDocument;

use super::error::{map_store_error, map_write_error, validate_body, validate_text};

/// MongoDB implementation of ThoughtRepository
#[derive(Clone)]
pub struct MongoThoughtRepository {
    collection: Collection<ThoughtDocument>,
}

impl MongoThoughtRepository {
    /// Create a new MongoThoughtRepository over the `thoughts` collection
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(ThoughtDocument::COLLECTION),
        }
    }
}

#[async_trait]
impl ThoughtRepository for MongoThoughtRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Thought>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_store_error)?;

        let docs: Vec<ThoughtDocument> = cursor.try_collect().await.map_err(map_store_error)?;

        Ok(docs.into_iter().map(Thought::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Thought>> {
        let oid = to_object_id(id)?;

        let result = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_store_error)?;

        Ok(result.map(Thought::from))
    }

    #[instrument(skip(self, ids))]
    async fn find_by_ids(&self, ids: &[DocumentId]) -> RepoResult<Vec<Thought>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let oids = to_object_ids(ids)?;

        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": oids } })
            .await
            .map_err(map_store_error)?;

        let docs: Vec<ThoughtDocument> = cursor.try_collect().await.map_err(map_store_error)?;

        Ok(docs.into_iter().map(Thought::from).collect())
    }

    #[instrument(skip(self, data))]
    async fn create(&self, data: NewThought) -> RepoResult<Thought> {
        validate_text(&data.text)?;
        let document = new_thought_document(data)?;

        self.collection
            .insert_one(&document)
            .await
            .map_err(map_write_error)?;

        Ok(Thought::from(document))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &DocumentId, patch: ThoughtPatch) -> RepoResult<Option<Thought>> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }
        if let Some(text) = &patch.text {
            validate_text(text)?;
        }
        let oid = to_object_id(id)?;

        // created_at is immutable; only the text can change
        let mut set = doc! {};
        if let Some(text) = patch.text {
            set.insert("text", text);
        }

        let result = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_write_error)?;

        Ok(result.map(Thought::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<Option<Thought>> {
        let oid = to_object_id(id)?;

        let result = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(map_store_error)?;

        Ok(result.map(Thought::from))
    }

    #[instrument(skip(self, ids))]
    async fn delete_many(&self, ids: &[DocumentId]) -> RepoResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let oids = to_object_ids(ids)?;

        let result = self
            .collection
            .delete_many(doc! { "_id": { "$in": oids } })
            .await
            .map_err(map_store_error)?;

        Ok(result.deleted_count)
    }

    #[instrument(skip(self, reaction))]
    async fn add_reaction(
        &self,
        thought_id: &DocumentId,
        reaction: &Reaction,
    ) -> RepoResult<Option<Thought>> {
        validate_body(&reaction.body)?;
        let oid = to_object_id(thought_id)?;

        let embedded = doc! {
            "id": reaction.id.to_string(),
            "body": reaction.body.as_str(),
            "username": reaction.username.as_str(),
            "created_at": BsonDateTime::from_chrono(reaction.created_at),
        };

        // Push only when no embedded reaction carries this id already
        let result = self
            .collection
            .find_one_and_update(
                doc! {
                    "_id": oid,
                    "reactions.id": { "$ne": reaction.id.to_string() },
                },
                doc! { "$push": { "reactions": embedded } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_store_error)?;

        if let Some(document) = result {
            return Ok(Some(Thought::from(document)));
        }

        // The filter misses both for an absent thought and for an id that is
        // already embedded; a read tells the idempotent no-op apart from
        // not-found.
        self.find_by_id(thought_id).await
    }

    #[instrument(skip(self))]
    async fn remove_reaction(
        &self,
        thought_id: &DocumentId,
        reaction_id: Uuid,
    ) -> RepoResult<Option<Thought>> {
        let oid = to_object_id(thought_id)?;

        let result = self
            .collection
            .find_one_and_update(
                doc! { "_id": oid },
                doc! { "$pull": { "reactions": { "id": reaction_id.to_string() } } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_store_error)?;

        Ok(result.map(Thought::from))
    }
}
