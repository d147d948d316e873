//! Users repository for database operations

use sqlx::postgres::PgRow;
use sqlx::{Executor, Postgres, Row};

use crate::{
    db::gateway,
    error::AppResult,
    models::enums::{AccessLevel, UserRole},
    models::user::{NewUser, User},
};

fn map_user(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        phone: row.try_get("phone")?,
        role: UserRole::from(row.try_get::<i16, _>("role")?),
        access_level: AccessLevel::from(row.try_get::<i16, _>("access_level")?),
        active: row.try_get("active")?,
        deleted: row.try_get("deleted")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UsersRepository;

impl UsersRepository {
    pub fn new() -> Self {
        Self
    }

    /// Get user by ID
    pub async fn find_by_id<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        id: i32,
    ) -> AppResult<Option<User>> {
        gateway::query_one(db, "SELECT * FROM users WHERE id = $1", |q| q.bind(id), map_user).await
    }

    /// Get user by email (authentication lookup)
    pub async fn find_by_email<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        email: &str,
    ) -> AppResult<Option<User>> {
        gateway::query_one(
            db,
            "SELECT * FROM users WHERE LOWER(email) = LOWER($1)",
            |q| q.bind(email.to_string()),
            map_user,
        )
        .await
    }

    /// Insert a normalized user record, returning the generated id.
    pub async fn save<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        user: &NewUser,
    ) -> AppResult<i32> {
        gateway::insert_returning_id(
            db,
            "INSERT INTO users (name, email, password_hash, phone, role, access_level) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
            |q| {
                q.bind(user.name.clone())
                    .bind(user.email.clone())
                    .bind(user.password_hash.clone())
                    .bind(user.phone.clone())
                    .bind(i16::from(user.role))
                    .bind(i16::from(user.access_level))
            },
        )
        .await
    }
}
