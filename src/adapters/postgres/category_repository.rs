//! PostgreSQL implementation of CategoryRepository.
//!
//! Persists Category aggregates to the `categories` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use super::search::{contains_pattern, push_order_by, push_page, to_total};
use crate::domain::category::{Category, CategoryFilter, CATEGORY_ENTITY};
use crate::domain::foundation::{
    CategoryId, DomainError, Repository, SearchParams, SearchResult, SearchableRepository,
    Timestamp,
};

const SORT_COLUMNS: &[(&str, &str)] = &[
    ("name", "name COLLATE \"C\""),
    ("created_at", "created_at"),
];

const SELECT_COLUMNS: &str = "SELECT category_id, name, description, is_active, created_at FROM categories";

/// PostgreSQL implementation of CategoryRepository.
#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new PostgresCategoryRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_existing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, DomainError> {
        sqlx::query_scalar("SELECT category_id FROM categories WHERE category_id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to look up categories: {}", e)))
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: Option<&CategoryFilter>) {
    if let Some(filter) = filter {
        builder.push(" WHERE name ILIKE ");
        builder.push_bind(contains_pattern(filter));
        builder.push(" ESCAPE '\\'");
    }
}

#[async_trait]
impl Repository<Category, CategoryId> for PostgresCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO categories (category_id, name, description, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(category.category_id().as_uuid())
        .bind(category.name())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert category: {}", e)))?;

        Ok(())
    }

    async fn bulk_insert(&self, categories: &[Category]) -> Result<(), DomainError> {
        if categories.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO categories (category_id, name, description, is_active, created_at) ",
        );
        builder.push_values(categories, |mut row, category| {
            row.push_bind(*category.category_id().as_uuid())
                .push_bind(category.name().to_string())
                .push_bind(category.description().map(str::to_string))
                .push_bind(category.is_active())
                .push_bind(*category.created_at().as_datetime());
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert categories: {}", e)))?;

        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE categories SET
                name = $2,
                description = $3,
                is_active = $4,
                created_at = $5
            WHERE category_id = $1
            "#,
        )
        .bind(category.category_id().as_uuid())
        .bind(category.name())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update category: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                CATEGORY_ENTITY,
                [category.category_id()],
            ));
        }

        Ok(())
    }

    async fn bulk_update(&self, categories: &[Category]) -> Result<(), DomainError> {
        if categories.is_empty() {
            return Ok(());
        }

        let ids: Vec<Uuid> = categories
            .iter()
            .map(|c| *c.category_id().as_uuid())
            .collect();
        let existing = self.find_existing_ids(&ids).await?;
        let missing: Vec<CategoryId> = categories
            .iter()
            .map(|c| *c.category_id())
            .filter(|id| !existing.contains(id.as_uuid()))
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::not_found(CATEGORY_ENTITY, missing));
        }

        for category in categories {
            self.update(category).await?;
        }

        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete category: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(CATEGORY_ENTITY, [id]));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE category_id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch category: {}", e)))?;

        row.map(row_to_category).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let rows = sqlx::query(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch categories: {}", e)))?;

        rows.into_iter().map(row_to_category).collect()
    }
}

#[async_trait]
impl SearchableRepository<Category, CategoryId, CategoryFilter> for PostgresCategoryRepository {
    fn sortable_fields(&self) -> &'static [&'static str] {
        crate::domain::category::CATEGORY_SORTABLE_FIELDS
    }

    async fn search(
        &self,
        params: &SearchParams<CategoryFilter>,
    ) -> Result<SearchResult<Category>, DomainError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM categories");
        push_filter(&mut count, params.filter());
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count categories: {}", e)))?;

        let mut query = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
        push_filter(&mut query, params.filter());
        push_order_by(&mut query, params, SORT_COLUMNS, "category_id");
        push_page(&mut query, params)?;
        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to search categories: {}", e)))?;

        let items = rows
            .into_iter()
            .map(row_to_category)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(total, returned = items.len(), "category search");

        Ok(SearchResult::new(
            items,
            to_total(total),
            params.page(),
            params.per_page(),
        ))
    }
}

/// Maps a row back to a Category, re-validating every field.
fn row_to_category(row: PgRow) -> Result<Category, DomainError> {
    let id: Uuid = row
        .try_get("category_id")
        .map_err(|e| DomainError::database(format!("Failed to read category_id: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database(format!("Failed to read name: {}", e)))?;
    let description: Option<String> = row
        .try_get("description")
        .map_err(|e| DomainError::database(format!("Failed to read description: {}", e)))?;
    let is_active: bool = row
        .try_get("is_active")
        .map_err(|e| DomainError::database(format!("Failed to read is_active: {}", e)))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to read created_at: {}", e)))?;

    let mut category = Category::reconstitute(
        CategoryId::from_uuid(id),
        name,
        description,
        is_active,
        Timestamp::from_datetime(created_at),
    );
    if !category.validate(&["name", "description", "is_active"]) {
        return Err(DomainError::database(format!(
            "Stored category {} failed validation: {}",
            id,
            category.notification()
        )));
    }

    Ok(category)
}
