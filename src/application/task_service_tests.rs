#[cfg(test)]
mod tests {
    use super::super::task_service::{TaskService, TaskServiceImpl};
    use crate::domain::{repository::TaskRepository, task::{NewTask, Task, TaskEdit, TaskId}};
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Store {
        next_id: i64,
        rows: HashMap<i64, Task>,
    }

    #[derive(Clone, Default)]
    struct InMemoryRepo {
        inner: Arc<Mutex<Store>>,
    }

    #[async_trait]
    impl TaskRepository for InMemoryRepo {
        async fn init(&self) -> Result<()> { Ok(()) }
        async fn insert(&self, input: NewTask) -> Result<Task> {
            let mut store = self.inner.lock().unwrap();
            store.next_id += 1;
            let task = Task {
                id: TaskId(store.next_id),
                description: input.description,
                completed: false,
                due_date: input.due_date,
                category: input.category,
            };
            store.rows.insert(task.id.0, task.clone());
            Ok(task)
        }
        async fn get(&self, id: TaskId) -> Result<Option<Task>> {
            Ok(self.inner.lock().unwrap().rows.get(&id.0).cloned())
        }
        async fn list(&self) -> Result<Vec<Task>> {
            let mut tasks: Vec<Task> = self.inner.lock().unwrap().rows.values().cloned().collect();
            // None sorts before Some, matching the store's null ordering
            tasks.sort_by_key(|t| (t.due_date, t.id.0));
            Ok(tasks)
        }
        async fn update(&self, id: TaskId, input: TaskEdit) -> Result<()> {
            if let Some(task) = self.inner.lock().unwrap().rows.get_mut(&id.0) {
                task.description = input.description;
                task.due_date = input.due_date;
                task.category = input.category;
            }
            Ok(())
        }
        async fn toggle_completed(&self, id: TaskId) -> Result<bool> {
            match self.inner.lock().unwrap().rows.get_mut(&id.0) {
                Some(task) => {
                    task.completed = !task.completed;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
        async fn delete(&self, id: TaskId) -> Result<()> {
            self.inner.lock().unwrap().rows.remove(&id.0);
            Ok(())
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn new_task(description: &str, due_date: Option<&str>, category: &str) -> NewTask {
        NewTask {
            description: description.into(),
            due_date: due_date.map(date),
            category: category.into(),
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_starts_pending() {
        let service = TaskServiceImpl::new(InMemoryRepo::default());
        let first = service.create(new_task("Buy milk", Some("2025-03-01"), "errand")).await.unwrap();
        let second = service.create(new_task("Buy milk", Some("2025-03-01"), "errand")).await.unwrap();
        assert!(!first.completed);
        assert_ne!(first.id, second.id);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn toggle_twice_restores_original_state() {
        let service = TaskServiceImpl::new(InMemoryRepo::default());
        let task = service.create(new_task("Water plants", None, "")).await.unwrap();
        assert!(service.toggle_completed(task.id).await.unwrap());
        assert!(service.get(task.id).await.unwrap().unwrap().completed);
        assert!(service.toggle_completed(task.id).await.unwrap());
        assert!(!service.get(task.id).await.unwrap().unwrap().completed);
    }

    #[tokio::test]
    async fn toggle_reports_missing_row() {
        let service = TaskServiceImpl::new(InMemoryRepo::default());
        assert!(!service.toggle_completed(TaskId(42)).await.unwrap());
    }

    #[tokio::test]
    async fn edit_overwrites_fields_but_not_completion() {
        let service = TaskServiceImpl::new(InMemoryRepo::default());
        let task = service.create(new_task("Buy milk", Some("2025-03-01"), "errand")).await.unwrap();
        service.toggle_completed(task.id).await.unwrap();
        service
            .edit(task.id, TaskEdit { description: "Buy oat milk".into(), due_date: Some(date("2025-03-01")), category: "errand".into() })
            .await
            .unwrap();
        let edited = service.get(task.id).await.unwrap().unwrap();
        assert_eq!(edited.id, task.id);
        assert_eq!(edited.description, "Buy oat milk");
        assert_eq!(edited.due_date, Some(date("2025-03-01")));
        assert!(edited.completed);
    }

    #[tokio::test]
    async fn edit_of_missing_id_is_a_no_op() {
        let service = TaskServiceImpl::new(InMemoryRepo::default());
        service
            .edit(TaskId(7), TaskEdit { description: "Ghost".into(), due_date: None, category: String::new() })
            .await
            .unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent_by_id() {
        let service = TaskServiceImpl::new(InMemoryRepo::default());
        let task = service.create(new_task("Shred documents", None, "home")).await.unwrap();
        service.delete(task.id).await.unwrap();
        service.delete(task.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_orders_by_due_date_with_undated_first() {
        let service = TaskServiceImpl::new(InMemoryRepo::default());
        service.create(new_task("beta", Some("2025-02-01"), "")).await.unwrap();
        service.create(new_task("alpha", None, "")).await.unwrap();
        service.create(new_task("gamma", Some("2025-01-01"), "")).await.unwrap();
        let names: Vec<String> = service.list().await.unwrap().into_iter().map(|t| t.description).collect();
        assert_eq!(names, ["alpha", "gamma", "beta"]);
    }
}
