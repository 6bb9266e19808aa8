//! Request DTOs with validation.
//!
//! String fields default to empty when absent so that a missing field and a
//! blank one produce the same "is required" message.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use scribe_entity::user::Gender;
use scribe_service::{PostInput, UserInput};

/// Rejects empty or whitespace-only text.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Registration and profile update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Email is required."))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Password is required."))]
    pub password: String,
    pub gender: Option<Gender>,
    #[validate(required(message = "Date of birth is required."))]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Firstname is required."))]
    pub firstname: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Lastname is required."))]
    pub lastname: String,
}

impl UserRequest {
    /// Convert a validated request into service input.
    pub fn into_input(self) -> Option<UserInput> {
        Some(UserInput {
            email: self.email,
            password: self.password,
            gender: self.gender,
            date_of_birth: self.date_of_birth?,
            firstname: self.firstname,
            lastname: self.lastname,
        })
    }
}

/// Login body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Username is required."))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Password is required."))]
    pub password: String,
}

/// Post creation and update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title is required."))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Content is required."))]
    pub content: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl From<PostRequest> for PostInput {
    fn from(req: PostRequest) -> Self {
        PostInput {
            title: req.title,
            content: req.content,
            categories: req.categories,
        }
    }
}

/// Comment creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Content is required."))]
    pub content: String,
    #[validate(required(message = "Post id is required."))]
    pub post_id: Option<i64>,
}

/// Comment update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Content is required."))]
    pub content: String,
    #[serde(alias = "commentID")]
    #[validate(required(message = "Comment id is required."))]
    pub comment_id: Option<i64>,
}

/// Role creation and update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Role name is required."))]
    pub role_name: String,
    #[serde(default)]
    pub role_description: String,
}

// ── Query strings ────────────────────────────────────────────

/// `?un=<email>`
#[derive(Debug, Clone, Deserialize)]
pub struct UserQuery {
    pub un: String,
}

/// `?pid=<post id>`
#[derive(Debug, Clone, Deserialize)]
pub struct PostQuery {
    #[serde(alias = "pId")]
    pub pid: i64,
}

/// `?cid=<comment id>`
#[derive(Debug, Clone, Deserialize)]
pub struct CommentQuery {
    #[serde(alias = "cId")]
    pub cid: i64,
}

/// `?roleName=<name>`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleQuery {
    pub role_name: String,
}

/// `?categories=a,b,c`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryQuery {
    #[serde(default)]
    pub categories: String,
}

impl CategoryQuery {
    /// The comma-separated labels, trimmed, without blanks.
    pub fn labels(&self) -> Vec<String> {
        self.categories
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect()
    }
}
