//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    NewThought, NewUser, RepoResult, ThoughtPatch, ThoughtRepository, UserPatch, UserRepository,
};
