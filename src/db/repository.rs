use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::DepartmentEnrollment;
use crate::resource::{FieldValue, NewRow, Patch, Resource};

fn quoted(identifier: &str) -> String {
    format!("\"{}\"", identifier)
}

fn push_value(qb: &mut QueryBuilder<'_, Sqlite>, value: &FieldValue) {
    match value {
        FieldValue::Null => qb.push_bind(None::<i64>),
        FieldValue::Integer(n) => qb.push_bind(*n),
        FieldValue::Bool(b) => qb.push_bind(*b),
        FieldValue::Text(s) => qb.push_bind(s.clone()),
    };
}

fn select_all_sql<R: Resource>() -> String {
    let columns: Vec<String> = std::iter::once(R::KEY)
        .chain(R::COLUMNS.iter().map(|c| c.name))
        .map(quoted)
        .collect();

    format!(
        "SELECT {} FROM {} ORDER BY {}",
        columns.join(", "),
        quoted(R::TABLE),
        quoted(R::KEY)
    )
}

pub async fn fetch_all<R: Resource>(db: &SqlitePool) -> Result<Vec<R>, sqlx::Error> {
    let sql = select_all_sql::<R>();
    sqlx::query_as::<_, R>(&sql).fetch_all(db).await
}

/// Returns the id the database assigned to the new row.
pub async fn insert<R: Resource>(db: &SqlitePool, row: &NewRow) -> Result<i64, sqlx::Error> {
    let mut qb = QueryBuilder::<Sqlite>::new("INSERT INTO ");
    qb.push(quoted(R::TABLE)).push(" (");
    for (i, (name, _)) in row.values().iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        qb.push(quoted(name));
    }
    qb.push(") VALUES (");
    for (i, (_, value)) in row.values().iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_value(&mut qb, value);
    }
    qb.push(")");

    let result = qb.build().execute(db).await?;
    Ok(result.last_insert_rowid())
}

/// Overwrites exactly the patched columns. `false` when no row has this id.
pub async fn update<R: Resource>(
    db: &SqlitePool,
    id: i64,
    patch: &Patch,
) -> Result<bool, sqlx::Error> {
    let mut qb = QueryBuilder::<Sqlite>::new("UPDATE ");
    qb.push(quoted(R::TABLE)).push(" SET ");
    for (i, (name, value)) in patch.fields().iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        qb.push(quoted(name)).push(" = ");
        push_value(&mut qb, value);
    }
    qb.push(" WHERE ").push(quoted(R::KEY)).push(" = ");
    qb.push_bind(id);

    let result = qb.build().execute(db).await?.rows_affected();
    Ok(result > 0)
}

pub async fn delete<R: Resource>(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let sql = format!(
        "DELETE FROM {} WHERE {} = ?",
        quoted(R::TABLE),
        quoted(R::KEY)
    );
    let result = sqlx::query(&sql)
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

pub async fn department_enrollment_counts(
    db: &SqlitePool,
) -> Result<Vec<DepartmentEnrollment>, sqlx::Error> {
    sqlx::query_as::<_, DepartmentEnrollment>(
        r#"
        SELECT
            d.DepartmentName AS department,
            COUNT(DISTINCT s.StudentID) AS student_count
        FROM students s
        INNER JOIN enrollments e ON s.StudentID = e.StudentID
        INNER JOIN courses c ON e.CourseID = c.CourseID
        INNER JOIN departments d ON c.DepartmentID = d.DepartmentID
        GROUP BY d.DepartmentID, d.DepartmentName
        ORDER BY d.DepartmentName
        "#,
    )
    .fetch_all(db)
    .await
}
