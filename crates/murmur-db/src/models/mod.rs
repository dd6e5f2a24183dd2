//! Document models - serde structs for the MongoDB collections

mod thought;
mod user;

pub use thought::{ReactionDocument, ThoughtDocument};
pub use user::UserDocument;
