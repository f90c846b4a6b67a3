// src/services/contact_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ContactRepository,
    models::contact::{Contact, ContactQuery, CreateContactPayload, UpdateContactPayload},
};

#[derive(Clone)]
pub struct ContactService {
    repo: ContactRepository,
}

impl ContactService {
    pub fn new(repo: ContactRepository) -> Self {
        Self { repo }
    }

    // Lista com os dois filtros opcionais: empresa (igualdade exata no store)
    // e busca livre (substring, sem diferenciar maiúsculas).
    pub async fn list(&self, query: &ContactQuery) -> Result<Vec<Contact>, AppError> {
        let contacts = match query.company.as_deref().filter(|c| !c.is_empty()) {
            Some(company) => {
                let mut found = self.repo.find_by("company", company).await?;
                // find_by devolve em ordem de inserção; empate fica com o mais novo na frente
                found.reverse();
                found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                found
            }
            None => self.repo.list().await?,
        };

        Ok(match query.q.as_deref() {
            Some(q) => search(contacts, q),
            None => contacts,
        })
    }

    pub async fn get(&self, id: Uuid) -> Result<Contact, AppError> {
        self.repo.get(id).await
    }

    pub async fn create(&self, payload: &CreateContactPayload) -> Result<Contact, AppError> {
        self.repo.create(payload).await
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateContactPayload) -> Result<Contact, AppError> {
        self.repo.update(id, payload).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}

/// Filtra a lista já carregada. Busca vazia devolve tudo.
pub fn search(contacts: Vec<Contact>, query: &str) -> Vec<Contact> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return contacts;
    }
    contacts.into_iter().filter(|c| c.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryStore;
    use std::sync::Arc;

    fn service() -> ContactService {
        ContactService::new(ContactRepository::new(Arc::new(InMemoryStore::default())))
    }

    fn payload(name: &str, email: Option<&str>, company: Option<&str>) -> CreateContactPayload {
        CreateContactPayload {
            name: name.into(),
            email: email.map(str::to_string),
            phone: None,
            company: company.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn search_matches_company_case_insensitively() {
        let svc = service();
        svc.create(&payload("Ann", None, Some("Acme Corp"))).await.unwrap();
        svc.create(&payload("Bob", Some("bob@x.io"), None)).await.unwrap();

        let query = ContactQuery { company: None, q: Some("ACME".into()) };
        let found = svc.list(&query).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ann");
    }

    #[tokio::test]
    async fn search_looks_at_name_and_email() {
        let svc = service();
        svc.create(&payload("Carla Dias", Some("carla@globex.com"), None)).await.unwrap();
        svc.create(&payload("Davi", Some("davi@initech.com"), None)).await.unwrap();

        let by_email = svc.list(&ContactQuery { company: None, q: Some("globex".into()) }).await.unwrap();
        assert_eq!(by_email.len(), 1);

        let by_name = svc.list(&ContactQuery { company: None, q: Some("dav".into()) }).await.unwrap();
        assert_eq!(by_name[0].name, "Davi");

        let blank = svc.list(&ContactQuery { company: None, q: Some("  ".into()) }).await.unwrap();
        assert_eq!(blank.len(), 2);
    }

    #[tokio::test]
    async fn company_filter_is_exact_and_newest_first() {
        let svc = service();
        svc.create(&payload("First", None, Some("Acme"))).await.unwrap();
        svc.create(&payload("Other", None, Some("acme"))).await.unwrap();
        svc.create(&payload("Second", None, Some("Acme"))).await.unwrap();

        let found = svc.list(&ContactQuery { company: Some("Acme".into()), q: None }).await.unwrap();
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn create_update_delete() {
        let svc = service();
        let created = svc.create(&payload("Eva", None, None)).await.unwrap();

        let patch = UpdateContactPayload { name: None, email: None, phone: Some("123".into()), company: None };
        let updated = svc.update(created.id, &patch).await.unwrap();
        assert_eq!(updated.name, "Eva");
        assert_eq!(updated.phone.as_deref(), Some("123"));

        svc.delete(created.id).await.unwrap();
        assert!(svc.list(&ContactQuery::default()).await.unwrap().is_empty());
        assert!(matches!(svc.get(created.id).await, Err(AppError::NotFound { .. })));
    }
}
