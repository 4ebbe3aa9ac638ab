//! SQL fragments shared by the searchable PostgreSQL repositories.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::foundation::{DomainError, SearchParams};

/// Builds an `ILIKE` pattern matching `text` anywhere, with wildcards in
/// `text` taken literally.
pub fn contains_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Appends `ORDER BY` for the requested sort.
///
/// `columns` maps each allowed sort field to its SQL expression. Unknown or
/// missing sort fields order by `created_at DESC`. The primary key `id_column`
/// always follows in the same direction so pages never overlap.
pub fn push_order_by<F>(
    builder: &mut QueryBuilder<'_, Postgres>,
    params: &SearchParams<F>,
    columns: &[(&str, &'static str)],
    id_column: &'static str,
) {
    let column = params
        .sort()
        .and_then(|sort| columns.iter().find(|(field, _)| *field == sort))
        .map(|(_, column)| *column);
    let (column, direction) = match column {
        Some(column) => (column, params.sort_dir().as_sql()),
        None => ("created_at", "DESC"),
    };
    builder.push(format!(
        " ORDER BY {column} {direction}, {id_column} {direction}"
    ));
}

/// Appends `LIMIT` / `OFFSET` for the requested page.
pub fn push_page<F>(
    builder: &mut QueryBuilder<'_, Postgres>,
    params: &SearchParams<F>,
) -> Result<(), DomainError> {
    let limit = i64::try_from(params.limit())
        .map_err(|_| DomainError::database("page size out of range"))?;
    let offset = i64::try_from(params.offset())
        .map_err(|_| DomainError::database("page offset out of range"))?;
    builder.push(" LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);
    Ok(())
}

/// Converts a `COUNT(*)` result to the unsigned total.
pub fn to_total(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
