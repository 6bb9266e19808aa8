//! Role domain entities.

pub mod model;

pub use model::{ADMIN, NewRole, Role, USER};
