//! User entity <-> document mapper

use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use murmur_core::entities::User;
use murmur_core::traits::NewUser;

use crate::models::UserDocument;

use super::to_document_id;

/// Convert UserDocument to User entity
impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: to_document_id(doc.id),
            username: doc.username,
            email: doc.email,
            thoughts: doc.thoughts.into_iter().map(to_document_id).collect(),
            friends: doc.friends.into_iter().map(to_document_id).collect(),
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// Build the document to insert for a new user
///
/// The id is assigned here, before insertion, so the created entity can be
/// returned without a read-back.
pub fn new_user_document(data: NewUser) -> UserDocument {
    let now = Utc::now();
    UserDocument {
        id: ObjectId::new(),
        username: data.username,
        email: data.email,
        thoughts: Vec::new(),
        friends: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}
