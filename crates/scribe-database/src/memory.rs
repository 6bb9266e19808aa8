//! In-process store implementing every store trait.
//!
//! All tables live behind one [`RwLock`], so each trait call is atomic with
//! respect to the others. Constraint checks mirror the PostgreSQL schema:
//! unique emails and role names, foreign keys, and cascading deletes.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use scribe_core::error::{AppError, ConflictKind};
use scribe_core::result::AppResult;
use scribe_core::types::{CommentId, PostId, RoleId, UserId};
use scribe_entity::comment::{Comment, NewComment};
use scribe_entity::post::{NewPost, Post};
use scribe_entity::role::{NewRole, Role};
use scribe_entity::user::{CreateUser, User};

use crate::repositories::{CommentStore, PostStore, RoleStore, UserStore};

#[derive(Debug, Default)]
struct Sequences {
    user: i64,
    role: i64,
    post: i64,
    comment: i64,
}

fn next(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    grants: BTreeMap<UserId, Vec<RoleId>>,
    roles: BTreeMap<RoleId, Role>,
    posts: BTreeMap<PostId, Post>,
    comments: BTreeMap<CommentId, Comment>,
    seq: Sequences,
}

impl Tables {
    fn user_id_by_email(&self, email: &str) -> Option<UserId> {
        let wanted = email.to_lowercase();
        self.users
            .values()
            .find(|u| u.email.to_lowercase() == wanted)
            .map(|u| u.id)
    }

    fn with_roles(&self, user: &User) -> User {
        let mut roles: Vec<String> = self
            .grants
            .get(&user.id)
            .into_iter()
            .flatten()
            .filter_map(|rid| self.roles.get(rid))
            .map(|r| r.name.clone())
            .collect();
        roles.sort();
        User {
            roles,
            ..user.clone()
        }
    }

    fn role_name_taken(&self, name: &str, except: Option<RoleId>) -> bool {
        self.roles
            .values()
            .any(|r| r.name == name && Some(r.id) != except)
    }

    fn remove_post(&mut self, id: PostId) -> bool {
        let removed = self.posts.remove(&id).is_some();
        if removed {
            self.comments.retain(|_, c| c.post_id != id);
        }
        removed
    }

    fn remove_posts_of(&mut self, author: UserId) -> u64 {
        let ids: Vec<PostId> = self
            .posts
            .values()
            .filter(|p| p.author_id == author)
            .map(|p| p.id)
            .collect();
        ids.into_iter().filter(|id| self.remove_post(*id)).count() as u64
    }
}

fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    posts
}

/// Data store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let t = self.tables.read().await;
        Ok(t
            .user_id_by_email(email)
            .and_then(|id| t.users.get(&id))
            .map(|u| t.with_roles(u)))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let t = self.tables.read().await;
        Ok(t.users.get(&id).map(|u| t.with_roles(u)))
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        let t = self.tables.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| t.users.get(id))
            .map(|u| t.with_roles(u))
            .collect())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.tables.read().await.user_id_by_email(email).is_some())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut t = self.tables.write().await;
        if t.user_id_by_email(&data.email).is_some() {
            return Err(AppError::store_conflict(ConflictKind::DuplicateEntry));
        }
        let mut role_ids = Vec::with_capacity(data.roles.len());
        for name in &data.roles {
            let role = t
                .roles
                .values()
                .find(|r| r.name == *name)
                .ok_or_else(|| AppError::not_found(format!("Role not found: {name}")))?;
            role_ids.push(role.id);
        }

        let now = Utc::now();
        let id = UserId::new(next(&mut t.seq.user));
        let user = User {
            id,
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            gender: data.gender,
            date_of_birth: data.date_of_birth,
            age: data.age,
            firstname: data.firstname.clone(),
            lastname: data.lastname.clone(),
            created_at: now,
            updated_at: now,
            roles: Vec::new(),
        };
        t.users.insert(id, user.clone());
        t.grants.insert(id, role_ids);
        Ok(t.with_roles(&user))
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let mut t = self.tables.write().await;
        if !t.users.contains_key(&user.id) {
            return Err(AppError::not_found(format!("User not found: {}", user.email)));
        }
        if t
            .user_id_by_email(&user.email)
            .is_some_and(|other| other != user.id)
        {
            return Err(AppError::store_conflict(ConflictKind::DuplicateEntry));
        }
        let stored = User {
            roles: Vec::new(),
            ..user.clone()
        };
        t.users.insert(user.id, stored.clone());
        Ok(t.with_roles(&stored))
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<bool> {
        let mut t = self.tables.write().await;
        let Some(id) = t.user_id_by_email(email) else {
            return Ok(false);
        };
        t.remove_posts_of(id);
        t.comments.retain(|_, c| c.author_id != id);
        t.grants.remove(&id);
        t.users.remove(&id);
        Ok(true)
    }
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let wanted = Role::normalize_name(name);
        let t = self.tables.read().await;
        Ok(t.roles.values().find(|r| r.name == wanted).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Role>> {
        let t = self.tables.read().await;
        let mut roles: Vec<Role> = t.roles.values().cloned().collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn create(&self, data: &NewRole) -> AppResult<Role> {
        let name = Role::normalize_name(&data.name);
        let mut t = self.tables.write().await;
        if t.role_name_taken(&name, None) {
            return Err(AppError::store_conflict(ConflictKind::DuplicateEntry));
        }
        let role = Role {
            id: RoleId::new(next(&mut t.seq.role)),
            name,
            description: data.description.clone(),
        };
        t.roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn update(&self, id: RoleId, data: &NewRole) -> AppResult<Role> {
        let name = Role::normalize_name(&data.name);
        let mut t = self.tables.write().await;
        if t.role_name_taken(&name, Some(id)) {
            return Err(AppError::store_conflict(ConflictKind::DuplicateEntry));
        }
        let role = t
            .roles
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Role not found: {id}")))?;
        role.name = name;
        role.description = data.description.clone();
        Ok(role.clone())
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn find_by_id(&self, id: PostId) -> AppResult<Option<Post>> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Post>> {
        let t = self.tables.read().await;
        Ok(newest_first(t.posts.values().cloned().collect()))
    }

    async fn find_by_author_email(&self, email: &str) -> AppResult<Vec<Post>> {
        let t = self.tables.read().await;
        let Some(author) = t.user_id_by_email(email) else {
            return Ok(Vec::new());
        };
        Ok(newest_first(
            t.posts
                .values()
                .filter(|p| p.author_id == author)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_categories(&self, categories: &[String]) -> AppResult<Vec<Post>> {
        let t = self.tables.read().await;
        Ok(newest_first(
            t.posts
                .values()
                .filter(|p| p.categories.iter().any(|c| categories.contains(c)))
                .cloned()
                .collect(),
        ))
    }

    async fn create(&self, data: &NewPost) -> AppResult<Post> {
        let mut t = self.tables.write().await;
        if !t.users.contains_key(&data.author_id) {
            return Err(AppError::store_conflict(ConflictKind::ForeignKey));
        }
        let post = Post {
            id: PostId::new(next(&mut t.seq.post)),
            title: data.title.clone(),
            content: data.content.clone(),
            created_at: data.created_at,
            updated_at: data.created_at,
            author_id: data.author_id,
            categories: data.categories.clone(),
        };
        t.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: &Post) -> AppResult<Post> {
        let mut t = self.tables.write().await;
        let stored = t
            .posts
            .get_mut(&post.id)
            .ok_or_else(|| AppError::not_found(format!("Post not found: {}", post.id)))?;
        stored.title = post.title.clone();
        stored.content = post.content.clone();
        stored.categories = post.categories.clone();
        stored.updated_at = post.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: PostId) -> AppResult<bool> {
        Ok(self.tables.write().await.remove_post(id))
    }

    async fn delete_all_by_author_email(&self, email: &str) -> AppResult<u64> {
        let mut t = self.tables.write().await;
        match t.user_id_by_email(email) {
            Some(author) => Ok(t.remove_posts_of(author)),
            None => Ok(0),
        }
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn find_by_id(&self, id: CommentId) -> AppResult<Option<Comment>> {
        Ok(self.tables.read().await.comments.get(&id).cloned())
    }

    async fn find_by_post_ids(&self, post_ids: &[PostId]) -> AppResult<Vec<Comment>> {
        let t = self.tables.read().await;
        let mut comments: Vec<Comment> = t
            .comments
            .values()
            .filter(|c| post_ids.contains(&c.post_id))
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(comments)
    }

    async fn create(&self, data: &NewComment) -> AppResult<Comment> {
        let mut t = self.tables.write().await;
        if !t.posts.contains_key(&data.post_id) || !t.users.contains_key(&data.author_id) {
            return Err(AppError::store_conflict(ConflictKind::ForeignKey));
        }
        let comment = Comment {
            id: CommentId::new(next(&mut t.seq.comment)),
            post_id: data.post_id,
            author_id: data.author_id,
            content: data.content.clone(),
            created_at: data.created_at,
            updated_at: data.created_at,
        };
        t.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn update(&self, comment: &Comment) -> AppResult<Comment> {
        let mut t = self.tables.write().await;
        let stored = t
            .comments
            .get_mut(&comment.id)
            .ok_or_else(|| AppError::not_found(format!("Comment not found: {}", comment.id)))?;
        stored.content = comment.content.clone();
        stored.updated_at = comment.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: CommentId) -> AppResult<bool> {
        Ok(self.tables.write().await.comments.remove(&id).is_some())
    }

    async fn delete_all_by_post(&self, post_id: PostId) -> AppResult<u64> {
        let mut t = self.tables.write().await;
        let before = t.comments.len();
        t.comments.retain(|_, c| c.post_id != post_id);
        Ok((before - t.comments.len()) as u64)
    }
}
