use sea_orm::DbErr;

use super::{identity::IdentityError, Error};

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently (bad request, bug, or missing data)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Constraint violations won't resolve with retry
                DbErr::Exec(_) | DbErr::Query(_) if db_err.sql_err().is_some() => {
                    ErrorRetryStrategy::Fail
                }
                // Lock timeouts, deadlocks, and I/O failures while executing a statement
                DbErr::Exec(_) | DbErr::Query(_) => ErrorRetryStrategy::Retry,

                // Type conversions, missing records, migration and model errors
                _ => ErrorRetryStrategy::Fail,
            },

            // Identity store outages are transient, rejections and hashing failures are not
            Self::IdentityError(IdentityError::Unavailable(_)) => ErrorRetryStrategy::Retry,
            Self::IdentityError(_) => ErrorRetryStrategy::Fail,

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            // I/O errors - transient network failures
            Self::IoError(_) => ErrorRetryStrategy::Retry,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Request errors - permanent failures (bad requests, missing data)
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::ValidationError(_) => ErrorRetryStrategy::Fail,

            // Domain errors - the resource state won't change between attempts
            Self::ShelterError(_) => ErrorRetryStrategy::Fail,
            Self::PetError(_) => ErrorRetryStrategy::Fail,
            Self::AdoptionError(_) => ErrorRetryStrategy::Fail,
            Self::UserError(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (bug within the server's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
