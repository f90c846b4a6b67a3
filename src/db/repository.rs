// src/db/repository.rs

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{marker::PhantomData, sync::Arc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::store::{Document, Fields, OrderBy, RecordStore},
};

/// Um tipo de registro ligado a uma coleção nomeada.
pub trait Record: DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;

    /// Ordenação padrão das listagens desse registro.
    fn default_order() -> Option<OrderBy> {
        None
    }
}

/// Converte qualquer payload serializável no mapa de campos de um documento.
/// Campos `None` marcados com `skip_serializing_if` simplesmente não aparecem,
/// o que dá a semântica de atualização parcial.
pub fn to_fields<S: Serialize>(input: &S) -> Result<Fields, AppError> {
    match serde_json::to_value(input)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::InternalServerError(anyhow::anyhow!(
            "Payload não é um objeto JSON: {}",
            other
        ))),
    }
}

pub fn decode<T: Record>(doc: Document) -> Result<T, AppError> {
    let id = doc.id;
    serde_json::from_value(doc.into_flat_value()).map_err(|e| AppError::CorruptRecord {
        collection: T::COLLECTION.to_string(),
        reason: format!("{id}: {e}"),
    })
}

// Listagens pulam documentos que não decodificam, registrando no log.
fn decode_all<T: Record>(docs: Vec<Document>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| match decode::<T>(doc) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Ignorando documento inválido: {}", e);
                None
            }
        })
        .collect()
}

/// Repositório tipado: um tipo de registro sobre o store genérico.
pub struct Repository<T: Record> {
    store: Arc<dyn RecordStore>,
    _marker: PhantomData<fn() -> T>,
}

// Clone manual para não exigir T: Clone
impl<T: Record> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Record> Repository<T> {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub async fn create<S: Serialize + Sync>(&self, input: &S) -> Result<T, AppError> {
        let doc = self.store.create(T::COLLECTION, to_fields(input)?).await?;
        tracing::debug!("Registro {} criado em {}", doc.id, T::COLLECTION);
        decode(doc)
    }

    pub async fn get(&self, id: Uuid) -> Result<T, AppError> {
        let doc = self
            .store
            .get(T::COLLECTION, id)
            .await?
            .ok_or_else(|| AppError::not_found(T::COLLECTION, id))?;
        decode(doc)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<T>, AppError> {
        self.store
            .get(T::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn list(&self) -> Result<Vec<T>, AppError> {
        let order = T::default_order();
        let docs = self.store.list(T::COLLECTION, order.as_ref()).await?;
        Ok(decode_all(docs))
    }

    pub async fn list_ordered(&self, order: &OrderBy) -> Result<Vec<T>, AppError> {
        let docs = self.store.list(T::COLLECTION, Some(order)).await?;
        Ok(decode_all(docs))
    }

    pub async fn find_by<V: Serialize + Send>(&self, field: &str, value: V) -> Result<Vec<T>, AppError> {
        let value = serde_json::to_value(value)?;
        let docs = self.store.find_by(T::COLLECTION, field, &value).await?;
        Ok(decode_all(docs))
    }

    pub async fn update<S: Serialize + Sync>(&self, id: Uuid, patch: &S) -> Result<T, AppError> {
        let doc = self.store.update(T::COLLECTION, id, to_fields(patch)?).await?;
        tracing::debug!("Registro {} atualizado em {}", id, T::COLLECTION);
        decode(doc)
    }

    pub async fn upsert<S: Serialize + Sync>(&self, id: Uuid, input: &S) -> Result<T, AppError> {
        let doc = self.store.upsert(T::COLLECTION, id, to_fields(input)?).await?;
        decode(doc)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete(T::COLLECTION, id).await?;
        tracing::debug!("Registro {} removido de {}", id, T::COLLECTION);
        Ok(())
    }
}
