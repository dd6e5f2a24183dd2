//! Thought document model

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Document stored in the `thoughts` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThoughtDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub text: String,
    pub user_id: ObjectId,
    #[serde(default)]
    pub reactions: Vec<ReactionDocument>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl ThoughtDocument {
    /// Collection name
    pub const COLLECTION: &'static str = "thoughts";
}

/// Reaction embedded inside a thought document
///
/// The id is a UUID stored as a string, independent of the ObjectId scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionDocument {
    pub id: Uuid,
    pub body: String,
    pub username: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}
