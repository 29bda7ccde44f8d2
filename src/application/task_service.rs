use crate::domain::repository::TaskRepository;
use crate::domain::task::{NewTask, Task, TaskEdit, TaskId};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TaskService: Send + Sync + 'static {
    async fn create(&self, input: NewTask) -> Result<Task>;
    async fn get(&self, id: TaskId) -> Result<Option<Task>>;
    async fn list(&self) -> Result<Vec<Task>>;
    async fn edit(&self, id: TaskId, input: TaskEdit) -> Result<()>;
    async fn toggle_completed(&self, id: TaskId) -> Result<bool>;
    async fn delete(&self, id: TaskId) -> Result<()>;
}

#[derive(Clone)]
pub struct TaskServiceImpl<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TaskRepository> TaskService for TaskServiceImpl<R> {
    async fn create(&self, input: NewTask) -> Result<Task> { self.repo.insert(input).await }
    async fn get(&self, id: TaskId) -> Result<Option<Task>> { self.repo.get(id).await }
    async fn list(&self) -> Result<Vec<Task>> { self.repo.list().await }
    async fn edit(&self, id: TaskId, input: TaskEdit) -> Result<()> { self.repo.update(id, input).await }
    async fn toggle_completed(&self, id: TaskId) -> Result<bool> { self.repo.toggle_completed(id).await }
    async fn delete(&self, id: TaskId) -> Result<()> { self.repo.delete(id).await }
}
