use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Argon2 failed to hash a password or the stored hash is malformed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Session token could not be signed.
    #[error("Failed to sign session token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),
}
