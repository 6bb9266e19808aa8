//! HTTP request handlers, one module per resource.

pub mod comment;
pub mod health;
pub mod post;
pub mod role;
pub mod user;
