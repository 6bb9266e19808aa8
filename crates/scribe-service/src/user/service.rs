//! User account use cases.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use scribe_auth::{
    AuthorizationPolicy, CredentialVerifier, PasswordHasher, PasswordValidator, TokenService,
};
use scribe_core::config::AuthConfig;
use scribe_core::error::AppError;
use scribe_core::result::AppResult;
use scribe_database::{RoleStore, UserStore};
use scribe_entity::user::{CreateUser, Gender, User, age_on};

use crate::context::RequestContext;
use crate::validate::{field_error, non_blank};

/// Profile data supplied at registration and on self-update.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub email: String,
    pub password: String,
    pub gender: Option<Gender>,
    pub date_of_birth: NaiveDate,
    pub firstname: String,
    pub lastname: String,
}

/// A user together with a freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub user: User,
    pub token: String,
}

/// Handles registration, login, and account self-service.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
    tokens: Arc<TokenService>,
    verifier: Arc<CredentialVerifier>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    policy: AuthorizationPolicy,
    minimum_age: u32,
}

impl UserService {
    /// Creates a new user service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        tokens: Arc<TokenService>,
        verifier: Arc<CredentialVerifier>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        policy: AuthorizationPolicy,
        config: &AuthConfig,
    ) -> Self {
        Self {
            users,
            roles,
            tokens,
            verifier,
            hasher,
            validator,
            policy,
            minimum_age: config.minimum_age,
        }
    }

    /// Register a new user granted `role_name` and issue their first token.
    pub async fn register(&self, input: UserInput, role_name: &str) -> AppResult<AuthOutcome> {
        let email = input.email.trim().to_string();
        non_blank(&email, "email", "Email is required.")?;

        if self.users.exists_by_email(&email).await? {
            return Err(AppError::already_exists(
                "There is a user associated with this email.",
            ));
        }

        let age = self.check_age(input.date_of_birth, Utc::now().date_naive())?;
        self.validator.validate(&input.password)?;

        let role = self
            .roles
            .find_by_name(role_name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Role not found: {role_name}")))?;

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .users
            .create(&CreateUser {
                email,
                password_hash,
                gender: input.gender,
                date_of_birth: input.date_of_birth,
                age,
                firstname: input.firstname,
                lastname: input.lastname,
                roles: vec![role.name],
            })
            .await?;

        let token = self.tokens.issue(&user.email)?;
        info!(user_id = %user.id, email = %user.email, role = role_name, "User registered");

        Ok(AuthOutcome { user, token })
    }

    /// Check credentials and issue a token.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthOutcome> {
        let user = self.verifier.authenticate(username.trim(), password).await?;
        let token = self.tokens.issue(&user.email)?;
        info!(user_id = %user.id, "User logged in");
        Ok(AuthOutcome { user, token })
    }

    /// Rewrite the profile of `username`. Only that user may do so.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        username: &str,
        input: UserInput,
    ) -> AppResult<User> {
        self.policy.ensure_can_mutate(&ctx.session, username)?;

        let mut user = self.find_by_email(username).await?;
        let age = self.check_age(input.date_of_birth, ctx.request_time.date_naive())?;

        let email = input.email.trim().to_string();
        non_blank(&email, "email", "Email is required.")?;
        if !email.eq_ignore_ascii_case(&user.email) && self.users.exists_by_email(&email).await? {
            return Err(AppError::already_exists(
                "There is a user associated with this email.",
            ));
        }
        self.validator.validate(&input.password)?;

        user.email = email;
        user.password_hash = self.hasher.hash_password(&input.password)?;
        user.gender = input.gender;
        user.date_of_birth = input.date_of_birth;
        user.age = age;
        user.firstname = input.firstname;
        user.lastname = input.lastname;
        user.updated_at = ctx.request_time;

        let updated = self.users.update(&user).await?;
        info!(user_id = %updated.id, email = %updated.email, "User updated");
        Ok(updated)
    }

    /// Delete `username` together with their posts and comments.
    pub async fn delete(&self, ctx: &RequestContext, username: &str) -> AppResult<()> {
        self.policy.ensure_can_mutate(&ctx.session, username)?;

        if !self.users.delete_by_email(username).await? {
            return Err(AppError::not_found(format!("User not found: {username}")));
        }
        info!(email = %username, "User deleted");
        Ok(())
    }

    /// Look up a user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<User> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {email}")))
    }

    /// Derive the age on `today`, enforcing a past birth date and the minimum age.
    fn check_age(&self, date_of_birth: NaiveDate, today: NaiveDate) -> AppResult<i32> {
        if date_of_birth >= today {
            return Err(field_error(
                "dateOfBirth",
                "Date of birth must be in the past.",
            ));
        }
        let age = age_on(date_of_birth, today);
        if age < self.minimum_age as i32 {
            warn!(%date_of_birth, age, "Rejected user below the minimum age");
            return Err(AppError::age_restriction(format!(
                "User must be at least {} years old to register.",
                self.minimum_age
            )));
        }
        Ok(age)
    }
}
