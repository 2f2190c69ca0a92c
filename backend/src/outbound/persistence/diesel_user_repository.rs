//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{NewAccount, StoredAccount, UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, PasswordHash, User, UserId, UserValidationError};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error, email: Option<&str>) -> UserPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        DieselFailure::UniqueViolation { .. } => match email {
            Some(email) => UserPersistenceError::duplicate_email(email),
            None => UserPersistenceError::query("unexpected unique violation"),
        },
        DieselFailure::Query(message) => UserPersistenceError::query(message),
    }
}

fn map_row_error(error: UserValidationError) -> UserPersistenceError {
    UserPersistenceError::query(format!("stored account is invalid: {error}"))
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    row.into_parts().map(|(user, _)| user).map_err(map_row_error)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, account: &NewAccount) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            email: account.email.as_ref(),
            company_name: account.company_name.as_ref(),
            password_hash: account.password_hash.as_str(),
        };

        let stored = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(account.email.as_ref())))?;
        row_to_user(stored)
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredAccount>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(|row| {
            row.into_parts()
                .map(|(user, hash)| StoredAccount {
                    user,
                    password_hash: PasswordHash::new(hash),
                })
                .map_err(map_row_error)
        })
        .transpose()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.as_i32())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_user).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[rstest]
    fn unique_violation_on_insert_is_a_duplicate_email() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error, Some("shop@example.com")),
            UserPersistenceError::duplicate_email("shop@example.com")
        );
    }

    #[rstest]
    fn pool_errors_are_connection_failures() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, UserPersistenceError::connection("timed out"));
    }

    #[rstest]
    fn invalid_stored_rows_surface_as_query_errors() {
        let row = UserRow {
            id: 1,
            email: "broken".to_owned(),
            company_name: "Acme".to_owned(),
            password_hash: "$argon2id$x".to_owned(),
            created_at: chrono::Utc::now(),
        };
        assert!(matches!(
            row_to_user(row),
            Err(UserPersistenceError::Query { .. })
        ));
    }
}
