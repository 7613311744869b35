//! Registration, login and session token issuing.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        api_usage::{ApiUsageRepository, DEFAULT_API_CALLS},
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginParam, RegisterUserParam, User},
    util::{
        password::{hash_password, verify_password},
        token::SessionTokens,
        validation::{validate_email, validate_password, validate_username},
    },
};

const EMAIL_EXISTS: &str = "Email already exists.";

/// Maps the unique-index violation from a concurrent sign-up to the duplicate-email 400.
fn duplicate_email(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest(EMAIL_EXISTS.to_string())
        }
        _ => err.into(),
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a SessionTokens,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a SessionTokens) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account with the default API allowance.
    ///
    /// Validates all fields, rejects emails already in use, hashes the password, then
    /// inserts the user and their usage row in one transaction.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Invalid field or email already registered
    /// - `Err(AppError::DbErr)` - Database error; nothing is persisted
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let username = validate_username(&param.username)?;
        let email = validate_email(&param.email)?;
        validate_password(&param.password)?;

        if UserRepository::new(self.db).email_exists(&email).await? {
            return Err(AppError::BadRequest(EMAIL_EXISTS.to_string()));
        }

        let password_hash = hash_password(&param.password)?;

        let txn = self.db.begin().await?;
        let user = UserRepository::new(&txn)
            .create(CreateUserParam {
                username,
                email,
                password_hash,
            })
            .await
            .map_err(duplicate_email)?;
        ApiUsageRepository::new(&txn)
            .create(user.id, DEFAULT_API_CALLS)
            .await?;
        txn.commit().await?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Checks credentials and issues a session token.
    ///
    /// Unknown emails and wrong passwords are indistinguishable to the caller.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The user and their signed token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, param: LoginParam) -> Result<(User, String), AppError> {
        let email = param.email.trim();

        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials(email.to_string()).into());
        };

        if !verify_password(&param.password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials(email.to_string()).into());
        }

        let token = self.issue_token(&credentials.user)?;

        Ok((credentials.user, token))
    }

    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        self.tokens.issue(user)
    }
}
