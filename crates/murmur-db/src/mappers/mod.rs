//! Entity <-> document mappers

mod thought;
mod user;

pub use thought::new_thought_document;
pub use user::new_user_document;

use mongodb::bson::oid::ObjectId;
use murmur_core::{DocumentId, DomainError};

/// Convert a domain id to the store's ObjectId
///
/// `DocumentId` guarantees a 24-character hex string, so a failure here
/// means a bug rather than bad input.
pub fn to_object_id(id: &DocumentId) -> Result<ObjectId, DomainError> {
    ObjectId::parse_str(id.as_str())
        .map_err(|_| DomainError::InternalError(format!("invalid document id: {id}")))
}

/// Convert a slice of domain ids to ObjectIds
pub fn to_object_ids(ids: &[DocumentId]) -> Result<Vec<ObjectId>, DomainError> {
    ids.iter().map(to_object_id).collect()
}

/// Convert a store ObjectId to a domain id
pub fn to_document_id(oid: ObjectId) -> DocumentId {
    DocumentId::new(oid.to_hex())
}
