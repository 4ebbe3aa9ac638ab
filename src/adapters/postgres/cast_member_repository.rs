//! PostgreSQL implementation of CastMemberRepository.
//!
//! Persists CastMember aggregates to the `castmembers` table. The type is
//! stored as its numeric code.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use super::search::{contains_pattern, push_order_by, push_page, to_total};
use crate::domain::cast_member::{
    CastMember, CastMemberFilter, CastMemberType, CAST_MEMBER_ENTITY,
    CAST_MEMBER_SORTABLE_FIELDS,
};
use crate::domain::foundation::{
    CastMemberId, DomainError, Repository, SearchParams, SearchResult, SearchableRepository,
    Timestamp,
};

const SORT_COLUMNS: &[(&str, &str)] = &[
    ("name", "name COLLATE \"C\""),
    ("type", "type"),
    ("created_at", "created_at"),
];

const SELECT_COLUMNS: &str = "SELECT castmember_id, name, type, created_at FROM castmembers";

/// PostgreSQL implementation of CastMemberRepository.
#[derive(Clone)]
pub struct PostgresCastMemberRepository {
    pool: PgPool,
}

impl PostgresCastMemberRepository {
    /// Creates a new PostgresCastMemberRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_existing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, DomainError> {
        sqlx::query_scalar("SELECT castmember_id FROM castmembers WHERE castmember_id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to look up cast members: {}", e)))
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: Option<&CastMemberFilter>) {
    let Some(filter) = filter else {
        return;
    };

    let mut separator = " WHERE ";
    if let Some(name) = filter.name() {
        builder.push(separator);
        builder.push("name ILIKE ");
        builder.push_bind(contains_pattern(name));
        builder.push(" ESCAPE '\\'");
        separator = " AND ";
    }
    if let Some(cast_member_type) = filter.cast_member_type {
        builder.push(separator);
        builder.push("type = ");
        builder.push_bind(cast_member_type.code());
    }
}

#[async_trait]
impl Repository<CastMember, CastMemberId> for PostgresCastMemberRepository {
    async fn insert(&self, cast_member: &CastMember) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO castmembers (castmember_id, name, type, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(cast_member.castmember_id().as_uuid())
        .bind(cast_member.name())
        .bind(cast_member.cast_member_type().code())
        .bind(cast_member.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert cast member: {}", e)))?;

        Ok(())
    }

    async fn bulk_insert(&self, cast_members: &[CastMember]) -> Result<(), DomainError> {
        if cast_members.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO castmembers (castmember_id, name, type, created_at) ",
        );
        builder.push_values(cast_members, |mut row, cast_member| {
            row.push_bind(*cast_member.castmember_id().as_uuid())
                .push_bind(cast_member.name().to_string())
                .push_bind(cast_member.cast_member_type().code())
                .push_bind(*cast_member.created_at().as_datetime());
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert cast members: {}", e)))?;

        Ok(())
    }

    async fn update(&self, cast_member: &CastMember) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE castmembers SET
                name = $2,
                type = $3,
                created_at = $4
            WHERE castmember_id = $1
            "#,
        )
        .bind(cast_member.castmember_id().as_uuid())
        .bind(cast_member.name())
        .bind(cast_member.cast_member_type().code())
        .bind(cast_member.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update cast member: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                CAST_MEMBER_ENTITY,
                [cast_member.castmember_id()],
            ));
        }

        Ok(())
    }

    async fn bulk_update(&self, cast_members: &[CastMember]) -> Result<(), DomainError> {
        if cast_members.is_empty() {
            return Ok(());
        }

        let ids: Vec<Uuid> = cast_members
            .iter()
            .map(|c| *c.castmember_id().as_uuid())
            .collect();
        let existing = self.find_existing_ids(&ids).await?;
        let missing: Vec<CastMemberId> = cast_members
            .iter()
            .map(|c| *c.castmember_id())
            .filter(|id| !existing.contains(id.as_uuid()))
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::not_found(CAST_MEMBER_ENTITY, missing));
        }

        for cast_member in cast_members {
            self.update(cast_member).await?;
        }

        Ok(())
    }

    async fn delete(&self, id: CastMemberId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM castmembers WHERE castmember_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete cast member: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(CAST_MEMBER_ENTITY, [id]));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: CastMemberId) -> Result<Option<CastMember>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE castmember_id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch cast member: {}", e)))?;

        row.map(row_to_cast_member).transpose()
    }

    async fn find_all(&self) -> Result<Vec<CastMember>, DomainError> {
        let rows = sqlx::query(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch cast members: {}", e)))?;

        rows.into_iter().map(row_to_cast_member).collect()
    }
}

#[async_trait]
impl SearchableRepository<CastMember, CastMemberId, CastMemberFilter>
    for PostgresCastMemberRepository
{
    fn sortable_fields(&self) -> &'static [&'static str] {
        CAST_MEMBER_SORTABLE_FIELDS
    }

    async fn search(
        &self,
        params: &SearchParams<CastMemberFilter>,
    ) -> Result<SearchResult<CastMember>, DomainError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM castmembers");
        push_filter(&mut count, params.filter());
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count cast members: {}", e)))?;

        let mut query = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
        push_filter(&mut query, params.filter());
        push_order_by(&mut query, params, SORT_COLUMNS, "castmember_id");
        push_page(&mut query, params)?;
        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to search cast members: {}", e)))?;

        let items = rows
            .into_iter()
            .map(row_to_cast_member)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(total, returned = items.len(), "cast member search");

        Ok(SearchResult::new(
            items,
            to_total(total),
            params.page(),
            params.per_page(),
        ))
    }
}

fn row_to_cast_member(row: PgRow) -> Result<CastMember, DomainError> {
    let id: Uuid = row
        .try_get("castmember_id")
        .map_err(|e| DomainError::database(format!("Failed to read castmember_id: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database(format!("Failed to read name: {}", e)))?;
    let code: i16 = row
        .try_get("type")
        .map_err(|e| DomainError::database(format!("Failed to read type: {}", e)))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to read created_at: {}", e)))?;

    let cast_member_type = CastMemberType::from_code(i64::from(code)).map_err(|e| {
        DomainError::database(format!("Stored cast member {} has invalid type: {}", id, e))
    })?;

    let mut cast_member = CastMember::reconstitute(
        CastMemberId::from_uuid(id),
        name,
        cast_member_type,
        Timestamp::from_datetime(created_at),
    );
    if !cast_member.validate(&["name", "type"]) {
        return Err(DomainError::database(format!(
            "Stored cast member {} failed validation: {}",
            id,
            cast_member.notification()
        )));
    }

    Ok(cast_member)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_for(filter: Option<&CastMemberFilter>) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM castmembers");
        push_filter(&mut builder, filter);
        builder.sql().to_string()
    }

    #[test]
    fn no_filter_adds_nothing() {
        assert_eq!(sql_for(None), "SELECT COUNT(*) FROM castmembers");
    }

    #[test]
    fn name_filter_only() {
        assert_eq!(
            sql_for(Some(&CastMemberFilter::by_name("ana"))),
            "SELECT COUNT(*) FROM castmembers WHERE name ILIKE $1 ESCAPE '\\'"
        );
    }

    #[test]
    fn type_filter_only() {
        assert_eq!(
            sql_for(Some(&CastMemberFilter::by_type(CastMemberType::Actor))),
            "SELECT COUNT(*) FROM castmembers WHERE type = $1"
        );
    }

    #[test]
    fn both_filters_are_anded() {
        let filter = CastMemberFilter {
            name: Some("ana".to_string()),
            cast_member_type: Some(CastMemberType::Director),
        };
        assert_eq!(
            sql_for(Some(&filter)),
            "SELECT COUNT(*) FROM castmembers WHERE name ILIKE $1 ESCAPE '\\' AND type = $2"
        );
    }
}
