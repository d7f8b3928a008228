//! Repository for the `members` table.
//!
//! Members carry no translations; identity is the unique email plus a
//! synthetic id. Also provides the read-side stats aggregation for the
//! admin dashboard.

use gbc_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::{CreateMember, Member, MemberStats, MonthlyNewMembers, UpdateMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, contact_name, organization, phone, membership_type, \
    city, country, status, created_at, updated_at";

/// Provides CRUD and aggregation operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member. Status always starts as `pending`; it is only
    /// advanced through [`MemberRepo::update`].
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members \
                (email, contact_name, organization, phone, membership_type, city, country, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending') \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.email)
            .bind(&input.contact_name)
            .bind(&input.organization)
            .bind(&input.phone)
            .bind(&input.membership_type)
            .bind(&input.city)
            .bind(&input.country)
            .fetch_one(pool)
            .await
    }

    /// Find a member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a member by email (exact match).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE email = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List one page of members, newest first, optionally filtered by
    /// status, with the total row count under the same filter.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Member>, i64), sqlx::Error> {
        let offset = (page - 1) * limit;
        let query = format!(
            "SELECT {COLUMNS} FROM members \
             WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Member>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM members WHERE ($1::TEXT IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((items, total))
    }

    /// Update a member's fields and/or status. Returns `None` if no member
    /// with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMember,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE members SET \
                contact_name = COALESCE($2, contact_name), \
                organization = COALESCE($3, organization), \
                phone = COALESCE($4, phone), \
                membership_type = COALESCE($5, membership_type), \
                city = COALESCE($6, city), \
                country = COALESCE($7, country), \
                status = COALESCE($8, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(&input.contact_name)
            .bind(&input.organization)
            .bind(&input.phone)
            .bind(&input.membership_type)
            .bind(&input.city)
            .bind(&input.country)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate status counts plus a zero-filled series of new members per
    /// calendar month over the trailing 12 months (current month included).
    pub async fn stats(pool: &PgPool) -> Result<MemberStats, sqlx::Error> {
        let (total, active, pending, inactive): (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
                    COUNT(*) FILTER (WHERE status = 'active'), \
                    COUNT(*) FILTER (WHERE status = 'pending'), \
                    COUNT(*) FILTER (WHERE status = 'inactive') \
             FROM members",
        )
        .fetch_one(pool)
        .await?;

        let monthly_new_members = sqlx::query_as::<_, MonthlyNewMembers>(
            "SELECT to_char(m.month, 'YYYY-MM') AS month, COALESCE(c.count, 0) AS count \
             FROM generate_series( \
                 date_trunc('month', NOW()) - INTERVAL '11 months', \
                 date_trunc('month', NOW()), \
                 INTERVAL '1 month') AS m(month) \
             LEFT JOIN ( \
                 SELECT date_trunc('month', created_at) AS month, COUNT(*) AS count \
                 FROM members GROUP BY 1 \
             ) c ON c.month = m.month \
             ORDER BY m.month",
        )
        .fetch_all(pool)
        .await?;

        Ok(MemberStats {
            total,
            active,
            pending,
            inactive,
            monthly_new_members,
        })
    }
}
