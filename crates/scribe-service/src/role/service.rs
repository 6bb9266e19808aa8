//! Role use cases. Everything except seeding requires the `ADMIN` role.

use std::sync::Arc;

use tracing::info;

use scribe_auth::AuthorizationPolicy;
use scribe_core::error::{AppError, ConflictKind, ErrorKind};
use scribe_core::result::AppResult;
use scribe_database::RoleStore;
use scribe_entity::role::{ADMIN, NewRole, Role};

use crate::context::RequestContext;
use crate::validate::non_blank;

/// Creates, renames, and lists roles.
#[derive(Debug, Clone)]
pub struct RoleService {
    roles: Arc<dyn RoleStore>,
    policy: AuthorizationPolicy,
}

impl RoleService {
    /// Creates a new role service.
    pub fn new(roles: Arc<dyn RoleStore>, policy: AuthorizationPolicy) -> Self {
        Self { roles, policy }
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: &str,
        description: &str,
    ) -> AppResult<Role> {
        let actor = self.policy.ensure_role(&ctx.session, ADMIN)?;
        non_blank(name, "roleName", "Role name is required.")?;

        let data = NewRole::new(name, description.trim());
        if self.roles.find_by_name(&data.name).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "Role already exists: {}",
                data.name
            )));
        }

        let role = self.roles.create(&data).await?;
        info!(role = %role.name, actor = %actor.email, "Role created");
        Ok(role)
    }

    /// Rename and redescribe the role currently called `current_name`.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        current_name: &str,
        new_name: &str,
        new_description: &str,
    ) -> AppResult<Role> {
        let actor = self.policy.ensure_role(&ctx.session, ADMIN)?;
        non_blank(new_name, "roleName", "Role name is required.")?;

        let current = self.get_by_name(current_name).await?;
        let data = NewRole::new(new_name, new_description.trim());
        if data.name != current.name && self.roles.find_by_name(&data.name).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "Role already exists: {}",
                data.name
            )));
        }

        let role = self.roles.update(current.id, &data).await?;
        info!(from = %current.name, to = %role.name, actor = %actor.email, "Role updated");
        Ok(role)
    }

    pub async fn get_by_name(&self, name: &str) -> AppResult<Role> {
        self.roles
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Role not found: {}", name.trim())))
    }

    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Role>> {
        self.policy.ensure_role(&ctx.session, ADMIN)?;
        self.roles.find_all().await
    }

    /// Insert the default roles that are missing. Returns how many were added.
    pub async fn seed_defaults(&self) -> AppResult<usize> {
        let mut added = 0;
        for role in NewRole::defaults() {
            if self.roles.find_by_name(&role.name).await?.is_some() {
                continue;
            }
            match self.roles.create(&role).await {
                Ok(created) => {
                    info!(role = %created.name, "Seeded default role");
                    added += 1;
                }
                // another instance seeded it first
                Err(e) if e.kind == ErrorKind::StoreConflict(ConflictKind::DuplicateEntry) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(added)
    }
}
