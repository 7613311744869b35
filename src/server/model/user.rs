//! User domain models and parameters.

use crate::{
    model::user::{AdminUserDto, CurrentUserDto},
    server::{error::AppError, util::parse::parse_i32_from_string, util::token::Claims},
};

/// Registered account without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl User {
    pub fn into_dto(self) -> CurrentUserDto {
        CurrentUserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            is_admin: self.is_admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            is_admin: entity.is_admin,
        }
    }

    /// Rebuilds the identity stored in a verified session token.
    ///
    /// # Returns
    /// - `Ok(User)` - Identity from the claims
    /// - `Err(AppError::InternalErr(ParseStringId))` - Subject is not a numeric ID
    pub fn from_claims(claims: Claims) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_i32_from_string(claims.sub)?,
            username: claims.username,
            email: claims.email,
            is_admin: claims.is_admin,
        })
    }
}

/// User together with the stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// User row for the admin table, joined with the remaining API calls.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithUsage {
    pub user: User,
    /// Remaining calls; 0 when the user has no usage row yet.
    pub api_calls: i32,
}

impl UserWithUsage {
    pub fn into_dto(self) -> AdminUserDto {
        AdminUserDto {
            id: self.user.id,
            username: self.user.username,
            email: self.user.email,
            is_admin: self.user.is_admin,
            api_calls: self.api_calls,
        }
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Parameters for self-registration, before validation and hashing.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Parameters for password login.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

/// Parameters for renaming a user.
#[derive(Debug, Clone)]
pub struct UpdateUsernameParam {
    /// ID of the signed-in user making the request.
    pub requester_id: i32,
    /// ID of the account to rename.
    pub user_id: i32,
    pub username: String,
}

/// Parameters for an admin deleting an account.
#[derive(Debug, Clone)]
pub struct DeleteUserParam {
    /// ID of the admin making the request.
    pub requester_id: i32,
    /// ID of the account to delete.
    pub user_id: i32,
}
