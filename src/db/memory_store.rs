// src/db/memory_store.rs

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::store::{compare_values, Direction, Document, Fields, OrderBy, RecordStore},
};

/// Store em memória, usado em desenvolvimento (sem DATABASE_URL) e nos testes.
///
/// Cada coleção guarda os documentos na ordem de inserção, o que deixa as
/// listagens sem ordenação explícita determinísticas.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> AppError {
    AppError::InternalServerError(anyhow!("Falha ao adquirir o lock do store: {}", e))
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn create(&self, collection: &str, fields: Fields) -> Result<Document, AppError> {
        let now = Utc::now();
        let doc = Document {
            id: Uuid::new_v4(),
            collection: collection.to_string(),
            data: fields,
            created_at: now,
            updated_at: now,
        };

        let mut collections = self.collections.write().map_err(lock_error)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());

        Ok(doc)
    }

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Document>, AppError> {
        let collections = self.collections.read().map_err(lock_error)?;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn list(&self, collection: &str, order: Option<&OrderBy>) -> Result<Vec<Document>, AppError> {
        let mut docs = {
            let collections = self.collections.read().map_err(lock_error)?;
            collections.get(collection).cloned().unwrap_or_default()
        };

        if let Some(order) = order {
            // sort_by é estável: empates mantêm a ordem de inserção
            docs.sort_by(|a, b| {
                let ord = compare_values(&a.sort_key(&order.field), &b.sort_key(&order.field));
                match order.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            });
        }

        Ok(docs)
    }

    async fn find_by(&self, collection: &str, field: &str, value: &Value) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.read().map_err(lock_error)?;

        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| d.data.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update(&self, collection: &str, id: Uuid, fields: Fields) -> Result<Document, AppError> {
        let mut collections = self.collections.write().map_err(lock_error)?;

        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| AppError::not_found(collection, id))?;

        doc.data.extend(fields);
        doc.updated_at = Utc::now();

        Ok(doc.clone())
    }

    async fn upsert(&self, collection: &str, id: Uuid, fields: Fields) -> Result<Document, AppError> {
        let now = Utc::now();
        let mut collections = self.collections.write().map_err(lock_error)?;
        let docs = collections.entry(collection.to_string()).or_default();

        match docs.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.data.extend(fields);
                doc.updated_at = now;
                Ok(doc.clone())
            }
            None => {
                let doc = Document {
                    id,
                    collection: collection.to_string(),
                    data: fields,
                    created_at: now,
                    updated_at: now,
                };
                docs.push(doc.clone());
                Ok(doc)
            }
        }
    }

    async fn delete(&self, collection: &str, id: Uuid) -> Result<(), AppError> {
        let mut collections = self.collections.write().map_err(lock_error)?;

        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| AppError::not_found(collection, id))?;

        let before = docs.len();
        docs.retain(|d| d.id != id);

        if docs.len() == before {
            return Err(AppError::not_found(collection, id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[tokio::test]
    async fn create_then_list_returns_fields_key_and_timestamps() {
        let store = InMemoryStore::new();

        let created = store
            .create("contacts", fields(json!({"name": "Ana", "company": "Acme Corp"})))
            .await
            .unwrap();

        let listed = store.list("contacts", None).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].data["name"], "Ana");
        assert_eq!(listed[0].data["company"], "Acme Corp");
        assert_eq!(listed[0].created_at, listed[0].updated_at);
    }

    #[tokio::test]
    async fn delete_removes_the_key() {
        let store = InMemoryStore::new();
        let a = store.create("deals", fields(json!({"title": "A"}))).await.unwrap();
        let b = store.create("deals", fields(json!({"title": "B"}))).await.unwrap();

        store.delete("deals", a.id).await.unwrap();

        let ids: Vec<Uuid> = store.list("deals", None).await.unwrap().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![b.id]);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.delete("deals", Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_merges_and_stamps() {
        let store = InMemoryStore::new();
        let created = store
            .create("tasks", fields(json!({"title": "Call", "priority": "low"})))
            .await
            .unwrap();

        let updated = store
            .update("tasks", created.id, fields(json!({"priority": "high"})))
            .await
            .unwrap();

        assert_eq!(updated.data["title"], "Call");
        assert_eq!(updated.data["priority"], "high");
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store
            .update("tasks", Uuid::new_v4(), Fields::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn find_by_matches_equality_only() {
        let store = InMemoryStore::new();
        store.create("contacts", fields(json!({"company": "Acme"}))).await.unwrap();
        store.create("contacts", fields(json!({"company": "Globex"}))).await.unwrap();
        store.create("contacts", fields(json!({"company": "acme"}))).await.unwrap();

        let found = store.find_by("contacts", "company", &json!("Acme")).await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn list_orders_by_document_field() {
        let store = InMemoryStore::new();
        store.create("activities", fields(json!({"timestamp": "2024-03-01T00:00:00Z"}))).await.unwrap();
        store.create("activities", fields(json!({"timestamp": "2024-05-01T00:00:00Z"}))).await.unwrap();
        store.create("activities", fields(json!({"timestamp": "2024-04-01T00:00:00Z"}))).await.unwrap();

        let docs = store
            .list("activities", Some(&OrderBy::desc("timestamp")))
            .await
            .unwrap();
        let stamps: Vec<&str> = docs.iter().map(|d| d.data["timestamp"].as_str().unwrap()).collect();
        assert_eq!(
            stamps,
            vec!["2024-05-01T00:00:00Z", "2024-04-01T00:00:00Z", "2024-03-01T00:00:00Z"]
        );
    }

    #[tokio::test]
    async fn upsert_creates_then_merges() {
        let store = InMemoryStore::new();
        let key = Uuid::new_v4();

        let first = store
            .upsert("userPreferences", key, fields(json!({"theme": "dark", "language": "en"})))
            .await
            .unwrap();
        assert_eq!(first.id, key);

        let second = store
            .upsert("userPreferences", key, fields(json!({"language": "pt"})))
            .await
            .unwrap();
        assert_eq!(second.data["theme"], "dark");
        assert_eq!(second.data["language"], "pt");
        assert_eq!(store.list("userPreferences", None).await.unwrap().len(), 1);
    }
}
