use sqlx::{Pool, QueryBuilder, Sqlite};

use crate::db::models::{CreditRecord, CreditRecordInput, FieldValue};
use crate::db::query::{ListParams, build_list_query};
use crate::db::schema::SQLITE_INIT;
use crate::error::ApiError;

pub type SqlitePool = Pool<Sqlite>;

/// Record gateway for the `credit_default` table. Every operation is a
/// single statement on one pooled connection.
#[derive(Clone)]
pub struct CreditStore {
    pool: SqlitePool,
}

impl CreditStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        // execute statements one by one (sqlx::query rejects multi-commands)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Filtered, sorted, paginated listing. See [`build_list_query`] for the
    /// exact semantics.
    pub async fn list(&self, params: &ListParams) -> Result<Vec<CreditRecord>, ApiError> {
        let mut qb = build_list_query(params)?;
        let rows = qb
            .build_query_as::<CreditRecord>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<CreditRecord, ApiError> {
        sqlx::query_as::<_, CreditRecord>("SELECT * FROM credit_default WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ApiError::NotFound)
    }

    /// Insert exactly the supplied fields and return the stored row,
    /// including the assigned id.
    pub async fn create(&self, input: &CreditRecordInput) -> Result<CreditRecord, ApiError> {
        if let Some(field) = input.missing_required_field() {
            return Err(ApiError::missing_field(field));
        }

        let fields = input.fields();
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new("INSERT INTO credit_default (");
        {
            let mut sep = qb.separated(", ");
            for (name, _) in &fields {
                sep.push(*name);
            }
        }
        qb.push(") VALUES (");
        {
            let mut sep = qb.separated(", ");
            for (_, value) in &fields {
                match value {
                    FieldValue::Int(v) => sep.push_bind(*v),
                    FieldValue::Real(v) => sep.push_bind(*v),
                };
            }
        }
        qb.push(") RETURNING *");

        let row = qb
            .build_query_as::<CreditRecord>()
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Partial update: rewrite only the supplied fields, leave the rest as
    /// stored. Returns the full updated row.
    pub async fn update(
        &self,
        id: i64,
        patch: &CreditRecordInput,
    ) -> Result<CreditRecord, ApiError> {
        let fields = patch.fields();
        if fields.is_empty() {
            return Err(ApiError::Validation("No fields to update".to_string()));
        }

        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE credit_default SET ");
        {
            let mut sep = qb.separated(", ");
            for (name, value) in &fields {
                sep.push(*name);
                sep.push_unseparated(" = ");
                match value {
                    FieldValue::Int(v) => sep.push_bind_unseparated(*v),
                    FieldValue::Real(v) => sep.push_bind_unseparated(*v),
                };
            }
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING *");

        qb.build_query_as::<CreditRecord>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ApiError::NotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM credit_default WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}
