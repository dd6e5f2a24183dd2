//! User entity - represents a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::DocumentId;

/// User entity
///
/// `thoughts` holds references to the thoughts this user authored, in
/// insertion order. `friends` is a set of directed edges to other users:
/// no duplicates, no self-reference, and no reciprocal edge is maintained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: DocumentId,
    pub username: String,
    pub email: String,
    pub thoughts: Vec<DocumentId>,
    pub friends: Vec<DocumentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: DocumentId, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            thoughts: Vec::new(),
            friends: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Number of friends (derived, never stored)
    #[inline]
    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    /// Check whether `other` is in this user's friend set
    #[inline]
    pub fn is_friend(&self, other: &DocumentId) -> bool {
        self.friends.contains(other)
    }

    /// Check whether this user's thought list references `thought_id`
    #[inline]
    pub fn owns_thought(&self, thought_id: &DocumentId) -> bool {
        self.thoughts.contains(thought_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_id(suffix: u8) -> DocumentId {
        DocumentId::new(format!("{:024x}", u128::from(suffix)))
    }

    #[test]
    fn test_new_user_has_no_references() {
        let user = User::new(test_id(1), "ana".to_string(), "ana@example.com".to_string());
        assert!(user.thoughts.is_empty());
        assert!(user.friends.is_empty());
        assert_eq!(user.friend_count(), 0);
    }

    #[test]
    fn test_friend_count_tracks_set() {
        let mut user = User::new(test_id(1), "ana".to_string(), "ana@example.com".to_string());
        user.friends.push(test_id(2));
        user.friends.push(test_id(3));
        assert_eq!(user.friend_count(), 2);
        assert!(user.is_friend(&test_id(2)));
        assert!(!user.is_friend(&test_id(4)));
    }

    #[test]
    fn test_owns_thought() {
        let mut user = User::new(test_id(1), "ana".to_string(), "ana@example.com".to_string());
        user.thoughts.push(test_id(9));
        assert!(user.owns_thought(&test_id(9)));
        assert!(!user.owns_thought(&test_id(8)));
    }
}
