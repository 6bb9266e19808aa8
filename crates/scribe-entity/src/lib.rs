//! # scribe-entity
//!
//! Domain entity models for Scribe: users (identities), roles, blog posts,
//! and comments, plus the composite read models returned by the services.

pub mod comment;
pub mod post;
pub mod role;
pub mod user;

pub use comment::Comment;
pub use post::Post;
pub use role::Role;
pub use user::{Gender, User};
