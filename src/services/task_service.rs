// src/services/task_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::TaskRepository,
    models::task::{CreateTaskPayload, NewTask, Task, TaskQuery, TaskStatus, UpdateTaskPayload},
};

#[derive(Clone)]
pub struct TaskService {
    repo: TaskRepository,
}

impl TaskService {
    pub fn new(repo: TaskRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self, user_id: Uuid, query: &TaskQuery) -> Result<Vec<Task>, AppError> {
        if !query.mine {
            return self.repo.list().await;
        }

        let mut tasks = self.repo.find_by("userId", user_id).await?;
        tasks.reverse();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    pub async fn all(&self) -> Result<Vec<Task>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Task, AppError> {
        self.repo.get(id).await
    }

    // Padrões: vence hoje, prioridade média, pendente
    pub async fn create(&self, user_id: Uuid, payload: CreateTaskPayload) -> Result<Task, AppError> {
        let task = NewTask {
            title: payload.title,
            description: payload.description.unwrap_or_default(),
            due_date: payload.due_date.unwrap_or_else(|| Utc::now().date_naive()),
            priority: payload.priority.unwrap_or_default(),
            status: TaskStatus::default(),
            completed: false,
            user_id,
        };

        self.repo.create(&task).await
    }

    // `status` e `completed` são independentes: um não altera o outro
    pub async fn update(&self, id: Uuid, payload: &UpdateTaskPayload) -> Result<Task, AppError> {
        self.repo.update(id, payload).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
