//! Blog post domain entities.

pub mod details;
pub mod model;

pub use details::{CommentDetails, PostDetails};
pub use model::{NewPost, Post, normalize_categories};
