use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::{
    auth::{
        dto::{NewUser, PublicUser},
        password::{hash_password, verify_password},
        repo_types::User,
    },
    error::AppError,
};

/// Register a new user. The UNIQUE constraint on `users.email` is the
/// authoritative guard against duplicates; the lookup here only short-cuts
/// the common case before paying for a hash.
pub async fn create_user(db: &PgPool, new_user: NewUser) -> Result<PublicUser, AppError> {
    if User::find_by_email(db, &new_user.email).await?.is_some() {
        warn!(email = %new_user.email, "email already registered");
        return Err(AppError::DuplicateEmail);
    }

    let hash = hash_password(&new_user.password)?;

    let user = User::create(db, &new_user.name, &new_user.email, &hash, &new_user.role)
        .await
        .map_err(|e| map_insert_error(e, &new_user.email))?;

    info!(user_id = user.id, email = %user.email, "user created");
    Ok(user.into_public())
}

/// Classify a failed insert. Concurrent sign-ups for the same email can
/// race past the pre-insert lookup; the constraint violation resolves the
/// race and is reported as a duplicate, not an internal failure.
fn map_insert_error(e: sqlx::Error, email: &str) -> AppError {
    if e.as_database_error()
        .is_some_and(|d| d.is_unique_violation())
    {
        warn!(email = %email, "duplicate email lost insert race");
        AppError::DuplicateEmail
    } else {
        error!(error = %e, "create user failed");
        AppError::Database(e)
    }
}

/// Authenticate by email and password. Unknown email and wrong password
/// yield the same error so the response cannot be used to enumerate
/// accounts; only the log lines distinguish the two cases.
pub async fn authenticate_user(
    db: &PgPool,
    email: &str,
    password: &str,
) -> Result<PublicUser, AppError> {
    let Some(user) = User::find_by_email(db, email).await? else {
        warn!(email = %email, "authentication for unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(email = %email, user_id = user.id, "authentication with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    info!(user_id = user.id, email = %user.email, "user authenticated");
    Ok(user.into_public())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};

    #[derive(Debug)]
    struct FakeUniqueViolation;

    impl std::fmt::Display for FakeUniqueViolation {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.message())
        }
    }

    impl std::error::Error for FakeUniqueViolation {}

    impl DatabaseError for FakeUniqueViolation {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint \"users_email_key\""
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    #[test]
    fn unique_violation_on_insert_becomes_duplicate_email() {
        let raced = sqlx::Error::Database(Box::new(FakeUniqueViolation));
        assert!(matches!(
            map_insert_error(raced, "ann@x.com"),
            AppError::DuplicateEmail
        ));
    }

    #[test]
    fn other_insert_errors_stay_database_errors() {
        let mapped = map_insert_error(sqlx::Error::RowNotFound, "ann@x.com");
        assert!(matches!(mapped, AppError::Database(_)));
    }
}
