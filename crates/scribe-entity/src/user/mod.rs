//! User domain entities.

pub mod age;
pub mod gender;
pub mod model;

pub use age::age_on;
pub use gender::Gender;
pub use model::{AuthorSummary, CreateUser, User};
