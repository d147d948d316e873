//! Members repository for database operations

use sqlx::postgres::PgRow;
use sqlx::{Executor, Postgres, Row};

use crate::{
    db::gateway,
    error::{AppError, AppResult},
    models::enums::{AccessLevel, MemberRole},
    models::member::{Member, NewMember},
};

/// Row mapper: role and access level live as SMALLINT codes.
fn map_member(row: &PgRow) -> Result<Member, sqlx::Error> {
    Ok(Member {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        active: row.try_get("active")?,
        deleted: row.try_get("deleted")?,
        role: MemberRole::from(row.try_get::<i16, _>("role")?),
        access_level: AccessLevel::from(row.try_get::<i16, _>("access_level")?),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MembersRepository;

impl MembersRepository {
    pub fn new() -> Self {
        Self
    }

    /// Get member by ID
    pub async fn find_by_id<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        id: i32,
    ) -> AppResult<Option<Member>> {
        gateway::query_one(db, "SELECT * FROM member WHERE id = $1", |q| q.bind(id), map_member)
            .await
    }

    /// Insert a new member, returning the generated id. New members start
    /// active and not deleted (table defaults).
    pub async fn save<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        member: &NewMember,
    ) -> AppResult<i32> {
        gateway::insert_returning_id(
            db,
            "INSERT INTO member (name, role, access_level) VALUES ($1, $2, $3) RETURNING id",
            |q| {
                q.bind(member.name.clone())
                    .bind(i16::from(member.role))
                    .bind(i16::from(member.access_level))
            },
        )
        .await
    }

    /// Activate or deactivate a member
    pub async fn set_active<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        member_id: i32,
        active: bool,
    ) -> AppResult<()> {
        const SQL: &str = "UPDATE member SET active = $1, updated_at = NOW() WHERE id = $2";
        let rows = gateway::execute(db, SQL, |q| q.bind(active).bind(member_id)).await?;
        if rows == 0 {
            return Err(AppError::no_rows(
                SQL,
                &format!("active-status update for member {} affected no rows", member_id),
            ));
        }
        Ok(())
    }

    /// Soft-delete a member: the row stays, the flag bars further loans.
    pub async fn soft_delete<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        member_id: i32,
    ) -> AppResult<()> {
        const SQL: &str = "UPDATE member SET deleted = TRUE, updated_at = NOW() WHERE id = $1";
        let rows = gateway::execute(db, SQL, |q| q.bind(member_id)).await?;
        if rows == 0 {
            return Err(AppError::no_rows(
                SQL,
                &format!("soft delete for member {} affected no rows", member_id),
            ));
        }
        Ok(())
    }
}
