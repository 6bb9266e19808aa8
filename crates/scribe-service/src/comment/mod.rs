//! Comment use cases.

pub mod service;

pub use service::CommentService;
