use async_trait::async_trait;
use super::task::{NewTask, Task, TaskEdit, TaskId};

/// Storage seam. `update` and `delete` are idempotent by id: affecting zero
/// rows is still success. `toggle_completed` reports whether a row was
/// flipped so callers can surface the missing-row case.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    async fn init(&self) -> anyhow::Result<()>;
    async fn insert(&self, input: NewTask) -> anyhow::Result<Task>;
    async fn get(&self, id: TaskId) -> anyhow::Result<Option<Task>>;
    /// All tasks, due date ascending, undated tasks first.
    async fn list(&self) -> anyhow::Result<Vec<Task>>;
    async fn update(&self, id: TaskId, input: TaskEdit) -> anyhow::Result<()>;
    async fn toggle_completed(&self, id: TaskId) -> anyhow::Result<bool>;
    async fn delete(&self, id: TaskId) -> anyhow::Result<()>;
}
