//! Thought entity <-> document mapper

use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use murmur_core::entities::{Reaction, Thought};
use murmur_core::traits::NewThought;
use murmur_core::DomainError;

use crate::models::{ReactionDocument, ThoughtDocument};

use super::{to_document_id, to_object_id};

/// Convert ThoughtDocument to Thought entity
impl From<ThoughtDocument> for Thought {
    fn from(doc: ThoughtDocument) -> Self {
        Thought {
            id: to_document_id(doc.id),
            text: doc.text,
            user_id: to_document_id(doc.user_id),
            reactions: doc.reactions.into_iter().map(Reaction::from).collect(),
            created_at: doc.created_at,
        }
    }
}

/// Convert ReactionDocument to Reaction entity
impl From<ReactionDocument> for Reaction {
    fn from(doc: ReactionDocument) -> Self {
        Reaction {
            id: doc.id,
            body: doc.body,
            username: doc.username,
            created_at: doc.created_at,
        }
    }
}

/// Convert a Reaction entity to its embedded document form
impl From<&Reaction> for ReactionDocument {
    fn from(reaction: &Reaction) -> Self {
        ReactionDocument {
            id: reaction.id,
            body: reaction.body.clone(),
            username: reaction.username.clone(),
            created_at: reaction.created_at,
        }
    }
}

/// Build the document to insert for a new thought
pub fn new_thought_document(data: NewThought) -> Result<ThoughtDocument, DomainError> {
    Ok(ThoughtDocument {
        id: ObjectId::new(),
        text: data.text,
        user_id: to_object_id(&data.user_id)?,
        reactions: Vec::new(),
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_core::DocumentId;

    #[test]
    fn test_new_thought_document() {
        let owner = DocumentId::new(ObjectId::new().to_hex());
        let doc = new_thought_document(NewThought {
            text: "hello".to_string(),
            user_id: owner.clone(),
        })
        .unwrap();

        assert_eq!(doc.text, "hello");
        assert_eq!(doc.user_id.to_hex(), owner.as_str());
        assert!(doc.reactions.is_empty());
    }

    #[test]
    fn test_document_to_entity_keeps_reactions() {
        let reaction = Reaction::new("nice".to_string(), "bea".to_string());
        let mut doc = new_thought_document(NewThought {
            text: "hello".to_string(),
            user_id: DocumentId::new(ObjectId::new().to_hex()),
        })
        .unwrap();
        doc.reactions.push(ReactionDocument::from(&reaction));

        let thought = Thought::from(doc);
        assert_eq!(thought.reaction_count(), 1);
        assert_eq!(thought.reactions[0].id, reaction.id);
    }
}
