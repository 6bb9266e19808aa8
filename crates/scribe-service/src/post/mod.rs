//! Blog post use cases and read-model assembly.

pub mod service;
pub mod views;

pub use service::{PostInput, PostService};
pub use views::ViewAssembler;
