//! # scribe-service
//!
//! Use cases for Scribe. Each service orchestrates the stores, the token
//! service, and the authorization policy. Every mutation checks the policy
//! before it touches a store.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod comment;
pub mod context;
pub mod post;
pub mod role;
pub mod user;

mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use comment::CommentService;
pub use context::RequestContext;
pub use post::{PostInput, PostService};
pub use role::RoleService;
pub use user::{AuthOutcome, UserInput, UserService};
