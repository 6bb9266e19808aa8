//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use scribe_core::types::{CommentId, PostId, RoleId};
use scribe_entity::post::{CommentDetails, PostDetails};
use scribe_entity::role::Role;
use scribe_entity::user::{AuthorSummary, Gender, User};

/// Returned after a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub email: String,
    pub gender: Option<Gender>,
    pub date_of_birth: NaiveDate,
    pub firstname: String,
    pub lastname: String,
    pub jwt_token: String,
}

impl RegistrationResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            email: user.email,
            gender: user.gender,
            date_of_birth: user.date_of_birth,
            firstname: user.firstname,
            lastname: user.lastname,
            jwt_token: token,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// A user's own profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub email: String,
    pub gender: Option<Gender>,
    pub date_of_birth: NaiveDate,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub roles: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            gender: user.gender,
            date_of_birth: user.date_of_birth,
            firstname: user.firstname,
            lastname: user.lastname,
            age: user.age,
            roles: user.roles,
        }
    }
}

/// Public author information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
}

impl From<AuthorSummary> for AuthorResponse {
    fn from(a: AuthorSummary) -> Self {
        Self {
            email: a.email,
            firstname: a.firstname,
            lastname: a.lastname,
        }
    }
}

/// A comment as shown to readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: CommentId,
    pub content: String,
    pub creation_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    pub author: AuthorResponse,
}

impl From<CommentDetails> for CommentResponse {
    fn from(c: CommentDetails) -> Self {
        Self {
            id: c.id,
            content: c.content,
            creation_date: c.created_at,
            last_modified_date: c.updated_at,
            author: c.author.into(),
        }
    }
}

/// A post with its author and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub creation_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    pub author: AuthorResponse,
    pub categories: Vec<String>,
    pub comments: Vec<CommentResponse>,
}

impl From<PostDetails> for PostResponse {
    fn from(p: PostDetails) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            creation_date: p.created_at,
            last_modified_date: p.updated_at,
            author: p.author.into(),
            categories: p.categories,
            comments: p.comments.into_iter().map(Into::into).collect(),
        }
    }
}

/// A role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub id: RoleId,
    pub role_name: String,
    pub role_description: String,
}

impl From<Role> for RoleResponse {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            role_name: r.name,
            role_description: r.description,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: String,
}

/// Number of rows removed by a bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}
