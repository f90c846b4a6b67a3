// src/db/store.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::common::error::AppError;

/// Campos livres de um documento (o "corpo" JSON, sem id nem timestamps).
pub type Fields = Map<String, Value>;

/// Um documento armazenado numa coleção.
///
/// Os metadados (`id`, `created_at`, `updated_at`) são mantidos pelo store,
/// nunca pelo chamador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub collection: String,
    #[sqlx(json)]
    pub data: Fields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Achata o documento num único objeto JSON: `{ id, createdAt, updatedAt, ...data }`.
    pub fn into_flat_value(self) -> Value {
        let mut object = self.data;
        object.insert("id".into(), Value::String(self.id.to_string()));
        object.insert("createdAt".into(), json_timestamp(self.created_at));
        object.insert("updatedAt".into(), json_timestamp(self.updated_at));
        Value::Object(object)
    }

    /// Valor usado na ordenação: metadados primeiro, depois campos do documento.
    pub fn sort_key(&self, field: &str) -> Value {
        match field {
            "createdAt" => json_timestamp(self.created_at),
            "updatedAt" => json_timestamp(self.updated_at),
            other => self.data.get(other).cloned().unwrap_or(Value::Null),
        }
    }
}

fn json_timestamp(ts: DateTime<Utc>) -> Value {
    Value::String(ts.to_rfc3339_opts(chrono::SecondsFormat::Micros, true))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Ordenação opcional de uma listagem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn desc(field: &str) -> Self {
        Self { field: field.to_string(), direction: Direction::Desc }
    }

    pub fn asc(field: &str) -> Self {
        Self { field: field.to_string(), direction: Direction::Asc }
    }
}

/// Compara dois valores JSON para ordenação: null < bool < número < string.
/// Timestamps RFC3339 são strings e ordenam corretamente como texto.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// O contrato CRUD genérico sobre coleções nomeadas.
///
/// Nenhuma operação tem controle de concorrência: a última escrita vence.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Gera uma chave, carimba `createdAt`/`updatedAt` e persiste.
    async fn create(&self, collection: &str, fields: Fields) -> Result<Document, AppError>;

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Document>, AppError>;

    /// Retorna a coleção inteira, sem paginação.
    async fn list(&self, collection: &str, order: Option<&OrderBy>) -> Result<Vec<Document>, AppError>;

    /// Consulta por igualdade de um único campo.
    async fn find_by(&self, collection: &str, field: &str, value: &Value) -> Result<Vec<Document>, AppError>;

    /// Mescla os campos no documento existente e carimba `updatedAt`.
    async fn update(&self, collection: &str, id: Uuid, fields: Fields) -> Result<Document, AppError>;

    /// Cria com a chave informada ou mescla se já existir.
    async fn upsert(&self, collection: &str, id: Uuid, fields: Fields) -> Result<Document, AppError>;

    async fn delete(&self, collection: &str, id: Uuid) -> Result<(), AppError>;
}
