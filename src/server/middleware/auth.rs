use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    state::AppState,
    util::cookie::AUTH_COOKIE,
};

/// Identity of the signed-in user, decoded from the session token.
///
/// Inserted into request extensions by [`require_auth`]; handlers behind that
/// middleware extract it directly.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}

/// Rejects requests without a valid `authToken` cookie.
///
/// On success the decoded identity is attached as [`AuthUser`] and the request
/// continues; otherwise a 401 is returned and later layers never run.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(cookie) = jar.get(AUTH_COOKIE) else {
        return Err(AuthError::MissingToken.into());
    };

    let claims = state.tokens.verify(cookie.value())?;
    let user = User::from_claims(claims)?;

    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}

pub enum Permission {
    Admin,
}

/// Re-checks the signed-in user against the database.
///
/// Token claims can be stale (a deleted account, a revoked admin flag), so routes
/// needing a permission load the current record.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    user: &'a User,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, user: &'a User) -> Self {
        Self { db, user }
    }

    /// Loads the user and checks every required permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Current database record of the user
    /// - `Err(AuthError::UserNotInDatabase)` - Account no longer exists
    /// - `Err(AuthError::AccessDenied)` - A required permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(self.user.id).await? else {
            return Err(AuthError::UserNotInDatabase(self.user.id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted to access an admin route without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
