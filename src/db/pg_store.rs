// src/db/pg_store.rs

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool};
use std::time::Duration;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::store::{Direction, Document, Fields, OrderBy, RecordStore},
};

const SELECT_COLUMNS: &str = "id, collection, data, created_at, updated_at";

/// Store de documentos sobre o Postgres: uma única tabela `documents`
/// com o corpo em JSONB, chaveada por (collection, id).
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Conecta, roda as migrações e devolve o store pronto.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        sqlx::migrate!().run(&pool).await?;

        tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

        Ok(Self::new(pool))
    }
}

// Só nomes conhecidos entram no SQL montado; o campo JSON vai sempre como parâmetro.
fn order_clause(order: Option<&OrderBy>) -> String {
    let Some(order) = order else {
        return "ORDER BY created_at ASC".to_string();
    };

    let direction = match order.direction {
        Direction::Asc => "ASC",
        Direction::Desc => "DESC",
    };

    match order.field.as_str() {
        "createdAt" => format!("ORDER BY created_at {direction}"),
        "updatedAt" => format!("ORDER BY updated_at {direction}"),
        _ => format!("ORDER BY data -> $2 {direction} NULLS LAST, created_at ASC"),
    }
}

#[async_trait]
impl RecordStore for PgDocumentStore {
    async fn create(&self, collection: &str, fields: Fields) -> Result<Document, AppError> {
        let sql = format!(
            "INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3) RETURNING {SELECT_COLUMNS}"
        );

        let doc = sqlx::query_as::<_, Document>(&sql)
            .bind(Uuid::new_v4())
            .bind(collection)
            .bind(Json(&fields))
            .fetch_one(&self.pool)
            .await?;

        Ok(doc)
    }

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Document>, AppError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM documents WHERE collection = $1 AND id = $2");

        let doc = sqlx::query_as::<_, Document>(&sql)
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(doc)
    }

    async fn list(&self, collection: &str, order: Option<&OrderBy>) -> Result<Vec<Document>, AppError> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM documents WHERE collection = $1 {}",
            order_clause(order)
        );

        let mut query = sqlx::query_as::<_, Document>(&sql).bind(collection);
        if let Some(order) = order.filter(|o| o.field != "createdAt" && o.field != "updatedAt") {
            query = query.bind(order.field.clone());
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn find_by(&self, collection: &str, field: &str, value: &Value) -> Result<Vec<Document>, AppError> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM documents WHERE collection = $1 AND data -> $2 = $3 ORDER BY created_at ASC"
        );

        let docs = sqlx::query_as::<_, Document>(&sql)
            .bind(collection)
            .bind(field)
            .bind(Json(value))
            .fetch_all(&self.pool)
            .await?;

        Ok(docs)
    }

    async fn update(&self, collection: &str, id: Uuid, fields: Fields) -> Result<Document, AppError> {
        // `||` no JSONB mescla as chaves de primeiro nível: a última escrita vence
        let sql = format!(
            "UPDATE documents SET data = data || $3, updated_at = NOW() \
             WHERE collection = $1 AND id = $2 RETURNING {SELECT_COLUMNS}"
        );

        sqlx::query_as::<_, Document>(&sql)
            .bind(collection)
            .bind(id)
            .bind(Json(&fields))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(collection, id))
    }

    async fn upsert(&self, collection: &str, id: Uuid, fields: Fields) -> Result<Document, AppError> {
        let sql = format!(
            "INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3) \
             ON CONFLICT (collection, id) DO UPDATE \
             SET data = documents.data || EXCLUDED.data, updated_at = NOW() \
             RETURNING {SELECT_COLUMNS}"
        );

        let doc = sqlx::query_as::<_, Document>(&sql)
            .bind(id)
            .bind(collection)
            .bind(Json(&fields))
            .fetch_one(&self.pool)
            .await?;

        Ok(doc)
    }

    async fn delete(&self, collection: &str, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(collection, id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_clause_uses_columns_for_metadata() {
        assert_eq!(order_clause(None), "ORDER BY created_at ASC");
        assert_eq!(
            order_clause(Some(&OrderBy::desc("createdAt"))),
            "ORDER BY created_at DESC"
        );
        assert_eq!(
            order_clause(Some(&OrderBy::asc("updatedAt"))),
            "ORDER BY updated_at ASC"
        );
    }

    #[test]
    fn order_clause_binds_document_fields() {
        let clause = order_clause(Some(&OrderBy::desc("timestamp")));
        assert!(clause.starts_with("ORDER BY data -> $2 DESC"));
        assert!(!clause.contains("timestamp"));
    }
}
